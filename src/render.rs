//! Offline rendering of a sound effect into 16-bit PCM samples.
//!
//! A `SynthesisRequest` describes one effect: a square wave swept linearly
//! from `start_freq` to `end_freq`, faded out linearly over `duration`, and
//! scaled by `volume`. `generate` pulls that voice for
//! `floor(SAMPLE_RATE * duration)` samples and quantizes each to `i16`.

use tracing::debug;

use crate::combinators::SignalExt;
use crate::core::{DEFAULT_SAMPLE_RATE, sample_count};
use crate::{ChirpSquare, Decay, LinearSweep, Signal};

/// Largest magnitude a quantized sample may take. The range is symmetric,
/// so `i16::MIN` never appears.
pub const FULL_SCALE: i16 = i16::MAX;

/// Parameters for one rendered sound effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisRequest {
    /// Frequency at the first sample, in Hz
    pub start_freq: f64,
    /// Frequency reached at `duration`, in Hz
    pub end_freq: f64,
    /// Length in seconds
    pub duration: f64,
    /// Peak amplitude, meaningful in [0, 1]
    pub volume: f64,
}

impl SynthesisRequest {
    /// Creates a request.
    ///
    /// # Arguments
    ///
    /// * `start_freq` - Frequency at the first sample, in Hz
    /// * `end_freq` - Frequency reached at `duration`, in Hz
    /// * `duration` - Length in seconds; zero or less renders nothing
    /// * `volume` - Peak amplitude, meaningful in [0, 1]
    pub const fn new(start_freq: f64, end_freq: f64, duration: f64, volume: f64) -> Self {
        Self {
            start_freq,
            end_freq,
            duration,
            volume,
        }
    }

    /// The pitch sweep of this request.
    pub fn sweep(&self) -> LinearSweep {
        LinearSweep::new(self.start_freq, self.end_freq, self.duration)
    }

    /// Number of samples this request renders to at `sample_rate`.
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        sample_count(sample_rate, self.duration)
    }
}

/// How a scaled floating-point sample becomes an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantization {
    /// Drop the fractional part (round toward zero).
    #[default]
    Truncate,
    /// Round to the nearest integer, halves away from zero.
    Nearest,
}

impl Quantization {
    /// Converts a sample in [-1, 1] to a 16-bit value in `[-FULL_SCALE, FULL_SCALE]`.
    ///
    /// Out-of-range input is clamped and NaN becomes silence.
    ///
    /// ```
    /// use dirge::Quantization;
    ///
    /// assert_eq!(Quantization::Truncate.quantize(0.25), 8191);
    /// assert_eq!(Quantization::Nearest.quantize(0.25), 8192);
    /// assert_eq!(Quantization::Truncate.quantize(-2.0), -32767);
    /// ```
    pub fn quantize(self, sample: f64) -> i16 {
        let scaled = sample * FULL_SCALE as f64;
        let whole = match self {
            Quantization::Truncate => scaled.trunc(),
            Quantization::Nearest => scaled.round(),
        };
        // `as` saturates and maps NaN to 0
        (whole as i32).clamp(-(FULL_SCALE as i32), FULL_SCALE as i32) as i16
    }
}

/// Rendered mono PCM samples together with their sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps already-quantized mono samples recorded at `sample_rate` Hz.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The samples in playback order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples (one per frame, as the buffer is mono).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value, 0 for an empty buffer.
    ///
    /// ```
    /// use dirge::SampleBuffer;
    ///
    /// let buffer = SampleBuffer::new(vec![3, -7, 5], 22050);
    /// assert_eq!(buffer.peak(), 7);
    /// assert_eq!(buffer.len(), 3);
    /// ```
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }
}

/// Renders `request` at `SAMPLE_RATE` with the default `Truncate` quantization.
///
/// # Examples
///
/// ```
/// use dirge::{SynthesisRequest, generate};
///
/// let buffer = generate::<22050>(&SynthesisRequest::new(220.0, 55.0, 0.18, 0.25));
/// assert_eq!(buffer.len(), 3969);
/// assert_eq!(buffer.samples()[0], 8191);
/// ```
pub fn generate<const SAMPLE_RATE: u32>(request: &SynthesisRequest) -> SampleBuffer {
    generate_with::<SAMPLE_RATE>(request, Quantization::default())
}

/// Renders `request` at `SAMPLE_RATE` using the given quantization.
///
/// A request without a positive duration renders an empty buffer.
pub fn generate_with<const SAMPLE_RATE: u32>(
    request: &SynthesisRequest,
    quantization: Quantization,
) -> SampleBuffer {
    let num_samples = request.sample_count(SAMPLE_RATE);
    debug!(
        num_samples,
        sample_rate = SAMPLE_RATE,
        ?request,
        ?quantization,
        "rendering sweep"
    );

    let mut voice = ChirpSquare::<SAMPLE_RATE>::new(request.sweep())
        .multiply(Decay::<SAMPLE_RATE>::new(request.duration))
        .gain(request.volume);

    let mut raw = vec![0.0; num_samples];
    voice.process(&mut raw);
    let samples = raw.into_iter().map(|s| quantization.quantize(s)).collect();

    SampleBuffer::new(samples, SAMPLE_RATE)
}

/// Renders `request` at `DEFAULT_SAMPLE_RATE`.
pub fn render(request: &SynthesisRequest) -> SampleBuffer {
    generate::<DEFAULT_SAMPLE_RATE>(request)
}
