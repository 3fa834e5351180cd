//! Core signal processing types and traits.
//!
//! - `Signal` trait for all signal sources and processors
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `sample_count` for converting a duration into a whole number of samples

mod audio;
mod signal;

pub use audio::{AudioSignal, DEFAULT_SAMPLE_RATE, sample_count};
pub use signal::Signal;
