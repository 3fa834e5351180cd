//! Dirge - procedural sound effects for a retro arcade game
//!
//! Renders short falling square-wave chirps with a linear fade-out and saves
//! them as 16-bit mono WAV files.

pub mod combinators;
pub mod core;
pub mod envelopes;
pub mod oscillators;
pub mod presets;
pub mod render;
#[cfg(feature = "wav-writer")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use combinators::{Gain, Multiply, SignalExt};
pub use crate::core::{AudioSignal, DEFAULT_SAMPLE_RATE, Signal};
pub use envelopes::Decay;
pub use oscillators::{ChirpSquare, LinearSweep};
pub use presets::SoundEffect;
pub use render::{
    Quantization, SampleBuffer, SynthesisRequest, generate, generate_with, render,
};
