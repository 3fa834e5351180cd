//! Audio signal trait for sample-rate-aware signals.

use crate::Signal;

/// Sample rate used by the game's sound effects.
pub const DEFAULT_SAMPLE_RATE: u32 = 22050;

/// A `Signal` whose sample rate is fixed at the type level.
///
/// Signals with different sample rates cannot be combined by accident,
/// because the combinators only implement `AudioSignal<SAMPLE_RATE>` when
/// every input shares the same rate.
///
/// # Examples
///
/// ```
/// use dirge::{AudioSignal, ChirpSquare, LinearSweep};
///
/// let osc: ChirpSquare<22050> = ChirpSquare::new(LinearSweep::new(220.0, 55.0, 0.18));
/// assert_eq!(osc.sample_rate(), 22050.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}

/// Number of whole samples that fit in `duration` seconds.
///
/// Non-positive and NaN durations produce zero samples.
///
/// ```
/// use dirge::core::sample_count;
///
/// assert_eq!(sample_count(22050, 0.18), 3969);
/// assert_eq!(sample_count(22050, 0.55), 12127);
/// assert_eq!(sample_count(22050, 0.0), 0);
/// ```
pub fn sample_count(sample_rate: u32, duration: f64) -> usize {
    if duration.is_nan() || duration <= 0.0 {
        return 0;
    }
    (sample_rate as f64 * duration).floor() as usize
}
