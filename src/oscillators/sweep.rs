//! Linear frequency sweep (chirp) with a closed-form phase.

use std::f64::consts::TAU;

/// A frequency that moves linearly from `start` to `end` over `duration` seconds.
///
/// The phase is the exact integral of the linear frequency ramp, evaluated
/// directly from the elapsed time. It is never accumulated sample by sample,
/// so rendering is free of drift and independent of how far the caller has
/// advanced.
///
/// # Examples
///
/// ```
/// use dirge::LinearSweep;
///
/// let sweep = LinearSweep::new(220.0, 55.0, 0.18);
/// assert_eq!(sweep.phase_at(0.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSweep {
    start: f64,
    end: f64,
    duration: f64,
}

impl LinearSweep {
    /// Creates a sweep from `start` Hz to `end` Hz lasting `duration` seconds.
    pub fn new(start: f64, end: f64, duration: f64) -> Self {
        Self {
            start,
            end,
            duration,
        }
    }

    /// Fraction of the sweep elapsed at `t`. A sweep with no positive
    /// duration never progresses.
    fn progress(&self, t: f64) -> f64 {
        if self.duration > 0.0 {
            t / self.duration
        } else {
            0.0
        }
    }

    /// Phase in radians at time `t` seconds.
    ///
    /// `2π·t·(start + (end - start)·(t/duration)/2)`, the integral of the
    /// instantaneous frequency `start + (end - start)·t/duration` from 0 to `t`.
    pub fn phase_at(&self, t: f64) -> f64 {
        TAU * t * (self.start + (self.end - self.start) * self.progress(t) / 2.0)
    }
}
