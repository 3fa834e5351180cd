//! Signal combinators for composing audio signals.
//!
//! A sound effect is built as `oscillator.multiply(envelope).gain(volume)`.

use crate::{AudioSignal, Signal};

/// Multiplies two signals together sample by sample.
///
/// Used to apply an envelope to an oscillator.
///
/// # Examples
///
/// ```
/// use dirge::{ChirpSquare, Decay, LinearSweep, Signal, SignalExt};
///
/// let osc = ChirpSquare::<22050>::new(LinearSweep::new(220.0, 55.0, 0.18));
/// let mut shaped = osc.multiply(Decay::<22050>::new(0.18));
/// assert_eq!(shaped.next_sample(), 1.0);
/// ```
pub struct Multiply<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Signal for Multiply<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() * self.b.next_sample()
    }
}

impl<const SAMPLE_RATE: u32, A: AudioSignal<SAMPLE_RATE>, B: AudioSignal<SAMPLE_RATE>>
    AudioSignal<SAMPLE_RATE> for Multiply<A, B>
{
}

/// Scales a signal by a fixed factor.
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.gain
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Gain<S> {}

/// Extension trait providing fluent combinator methods on any `Signal`.
pub trait SignalExt: Signal + Sized {
    /// Multiplies this signal with another signal.
    fn multiply<S: Signal>(self, other: S) -> Multiply<Self, S> {
        Multiply { a: self, b: other }
    }

    /// Applies a gain factor to this signal.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain { source: self, gain }
    }
}

impl<T: Signal + Sized> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl Signal for Constant {
        fn next_sample(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_multiply() {
        let mut product = Constant(0.5).multiply(Constant(-4.0));
        assert_eq!(product.next_sample(), -2.0);
    }

    #[test]
    fn test_gain() {
        let mut quieter = Constant(1.0).gain(0.25);
        assert_eq!(quieter.next_sample(), 0.25);
        assert_eq!(quieter.next_sample(), 0.25);
    }

    #[test]
    fn test_chain_preserves_sample_rate() {
        use crate::{ChirpSquare, Decay, LinearSweep};

        let chain = ChirpSquare::<22050>::new(LinearSweep::new(220.0, 55.0, 0.18))
            .multiply(Decay::<22050>::new(0.18))
            .gain(0.25);
        assert_eq!(AudioSignal::<22050>::sample_rate(&chain), 22050.0);
    }
}
