//! Gated sine burst generator.

use crate::{Signal, TimeVector};
use std::f64::consts::PI;

/// A sine carrier that is on for a whole number of cycles starting at `t = 0`.
///
/// Negative frequencies or cycle counts are accepted and simply produce an
/// empty window, so every sample is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineBurst {
    /// Carrier frequency in Hz
    frequency: f64,
    /// Number of carrier cycles inside the window
    n_cycles: i32,
}

impl SineBurst {
    /// Creates a new burst.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Carrier frequency in Hz
    /// * `n_cycles` - Number of cycles the carrier stays on
    ///
    /// # Examples
    ///
    /// ```
    /// use rfpulse::SineBurst;
    ///
    /// let burst = SineBurst::new(2e6, 5);
    /// assert!((burst.duration() - 2.5e-6).abs() < 1e-18);
    /// ```
    pub fn new(frequency: f64, n_cycles: i32) -> Self {
        Self {
            frequency,
            n_cycles,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn n_cycles(&self) -> i32 {
        self.n_cycles
    }

    /// Length of the on window in seconds.
    pub fn duration(&self) -> f64 {
        self.n_cycles as f64 / self.frequency
    }

    /// Whether `t` falls inside the closed window `[0, duration]`.
    pub fn contains(&self, t: f64) -> bool {
        t >= 0.0 && t <= self.duration()
    }

    /// Amplitude at time `t`.
    pub fn sample(&self, t: f64) -> f64 {
        if self.contains(t) {
            (2.0 * PI * self.frequency * t).sin()
        } else {
            0.0
        }
    }

    /// Renders the burst over a time vector.
    pub fn generate(&self, t: &[f64]) -> Vec<f64> {
        let pulse: Vec<f64> = t.iter().map(|&ti| self.sample(ti)).collect();

        let active = t.iter().filter(|&&ti| self.contains(ti)).count();
        if active == 0 && !t.is_empty() {
            log::warn!(
                "pulse window [0, {:e}] s contains none of the {} samples",
                self.duration(),
                t.len()
            );
        } else {
            log::debug!(
                "rendered {} Hz burst: {} of {} samples in window",
                self.frequency,
                active,
                t.len()
            );
        }

        pulse
    }

    /// Streams the burst over an evenly spaced time base.
    ///
    /// The source starts at the first timestamp of `time` and keeps stepping
    /// past its end, producing zeros once the window has passed.
    pub fn source(self, time: TimeVector) -> BurstSource {
        BurstSource {
            burst: self,
            start: time.start(),
            step: time.step(),
            index: 0,
        }
    }
}

/// Sample-by-sample view of a [`SineBurst`].
///
/// # Examples
///
/// ```
/// use rfpulse::{Signal, SineBurst, TimeVector};
///
/// let time = TimeVector::from_sample_rate(0.0, 1.0, 8.0).unwrap();
/// let mut source = SineBurst::new(1.0, 1).source(time);
/// let mut buffer = vec![0.0; 8];
/// source.process(&mut buffer);
/// assert!((buffer[2] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BurstSource {
    burst: SineBurst,
    start: f64,
    step: f64,
    index: usize,
}

impl BurstSource {
    /// Rewinds to the first timestamp.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Timestamp of the next sample to be produced.
    pub fn time(&self) -> f64 {
        self.start + self.index as f64 * self.step
    }
}

impl Signal for BurstSource {
    fn next_sample(&mut self) -> f64 {
        let sample = self.burst.sample(self.time());
        self.index += 1;
        sample
    }
}
