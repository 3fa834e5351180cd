//! Oscillators for generating periodic waveforms.
//!
//! Pitch is described by a `LinearSweep`, and `ChirpSquare` turns that sweep
//! into a two-level square wave.

mod chirp_square;
mod sweep;

pub use chirp_square::ChirpSquare;
pub use sweep::LinearSweep;
