//! Per-sample signal trait.
//!
//! Everything that produces samples in this crate (oscillators, envelopes,
//! combinators) implements `Signal`.

/// Common interface for all signal sources and processors.
///
/// Signals are pulled one sample at a time with `next_sample()`. Batch
/// generation into a slice is available through `process()`.
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
