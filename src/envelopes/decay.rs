//! One-shot linear decay envelope.

use crate::{AudioSignal, Signal};

/// Envelope that falls linearly from 1.0 at the first sample to 0.0 after `duration` seconds.
///
/// The level at time `t` is `1 - t / duration`. Past the end the level stays
/// at 0.0, and an envelope without a positive duration is silent.
///
/// # Examples
///
/// ```
/// use dirge::{Decay, Signal};
///
/// let mut env = Decay::<22050>::new(0.5);
/// assert_eq!(env.next_sample(), 1.0);
/// assert!(env.next_sample() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Decay<const SAMPLE_RATE: u32> {
    duration: f64,
    index: u64,
}

impl<const SAMPLE_RATE: u32> Decay<SAMPLE_RATE> {
    /// Creates an envelope that reaches silence after `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self { duration, index: 0 }
    }

    /// Envelope level at `t` seconds.
    pub fn level_at(&self, t: f64) -> f64 {
        if self.duration > 0.0 {
            (1.0 - t / self.duration).max(0.0)
        } else {
            0.0
        }
    }
}

impl<const SAMPLE_RATE: u32> Signal for Decay<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let level = self.level_at(self.index as f64 / SAMPLE_RATE as f64);
        self.index += 1;
        level
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for Decay<SAMPLE_RATE> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_full_level() {
        let mut env = Decay::<22050>::new(0.18);
        assert_eq!(env.next_sample(), 1.0);
    }

    #[test]
    fn test_strictly_decreasing() {
        let mut env = Decay::<22050>::new(0.18);
        let mut previous = env.next_sample();
        for _ in 1..3969 {
            let level = env.next_sample();
            assert!(level < previous);
            assert!(level > 0.0);
            previous = level;
        }
        // last sample sits one sample period before the end
        assert!(previous < 1e-3);
    }

    #[test]
    fn test_linear_level() {
        let env = Decay::<22050>::new(2.0);
        assert_eq!(env.level_at(0.5), 0.75);
        assert_eq!(env.level_at(2.0), 0.0);
        assert_eq!(env.level_at(5.0), 0.0);
    }

    #[test]
    fn test_silent_after_duration() {
        let mut env = Decay::<100>::new(0.1);
        for _ in 0..10 {
            assert!(env.next_sample() > 0.0);
        }
        assert_eq!(env.next_sample(), 0.0);
        assert_eq!(env.next_sample(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_silent() {
        let mut env = Decay::<22050>::new(0.0);
        assert_eq!(env.next_sample(), 0.0);
    }
}
