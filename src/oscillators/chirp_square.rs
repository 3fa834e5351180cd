//! Square wave oscillator driven by a linear frequency sweep.

use super::LinearSweep;
use crate::{AudioSignal, Signal};

/// Square wave whose pitch follows a `LinearSweep`.
///
/// Each sample is `+1.0` when `sin(phase) >= 0` and `-1.0` otherwise, with
/// the phase taken from the sweep at `index / SAMPLE_RATE` seconds. The first
/// sample is always `+1.0`.
///
/// # Examples
///
/// ```
/// use dirge::{ChirpSquare, LinearSweep, Signal};
///
/// let mut osc = ChirpSquare::<22050>::new(LinearSweep::new(220.0, 55.0, 0.18));
/// assert_eq!(osc.next_sample(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ChirpSquare<const SAMPLE_RATE: u32> {
    sweep: LinearSweep,
    index: u64,
}

impl<const SAMPLE_RATE: u32> ChirpSquare<SAMPLE_RATE> {
    pub fn new(sweep: LinearSweep) -> Self {
        Self { sweep, index: 0 }
    }
}

impl<const SAMPLE_RATE: u32> Signal for ChirpSquare<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let t = self.index as f64 / SAMPLE_RATE as f64;
        self.index += 1;
        if self.sweep.phase_at(t).sin() >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for ChirpSquare<SAMPLE_RATE> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_crossings(samples: &[f64]) -> usize {
        samples.windows(2).filter(|w| w[0] != w[1]).count()
    }

    #[test]
    fn test_first_sample_is_high() {
        let mut osc = ChirpSquare::<22050>::new(LinearSweep::new(330.0, 55.0, 0.55));
        assert_eq!(osc.next_sample(), 1.0);
    }

    #[test]
    fn test_sample_range() {
        let mut osc = ChirpSquare::<22050>::new(LinearSweep::new(220.0, 55.0, 0.18));
        for _ in 0..4000 {
            let sample = osc.next_sample();
            assert!(sample == 1.0 || sample == -1.0);
        }
    }

    #[test]
    fn test_same_sweep_same_output() {
        let sweep = LinearSweep::new(220.0, 55.0, 0.18);
        let mut first = [0.0; 256];
        ChirpSquare::<22050>::new(sweep).process(&mut first);
        let mut second = [0.0; 256];
        ChirpSquare::<22050>::new(sweep).process(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_constant_pitch_duty_cycle() {
        let mut osc = ChirpSquare::<44100>::new(LinearSweep::new(100.0, 100.0, 1.0));
        let mut buffer = vec![0.0; 441];
        osc.process(&mut buffer);
        let high = buffer.iter().filter(|&&s| s == 1.0).count();
        let low = buffer.len() - high;
        assert!(high.abs_diff(low) <= 2);
    }

    #[test]
    fn test_falling_sweep_slows_down() {
        let mut osc = ChirpSquare::<22050>::new(LinearSweep::new(330.0, 55.0, 0.55));
        let mut buffer = vec![0.0; 12127];
        osc.process(&mut buffer);
        let quarter = buffer.len() / 4;
        let early = zero_crossings(&buffer[..quarter]);
        let late = zero_crossings(&buffer[buffer.len() - quarter..]);
        assert!(early > late);
    }
}
