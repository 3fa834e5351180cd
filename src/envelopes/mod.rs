//! Envelope generators for shaping loudness over time.

mod decay;

pub use decay::Decay;
