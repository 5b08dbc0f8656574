//! Evenly spaced time base.

use crate::{Error, Result};

/// An evenly spaced sequence of timestamps in seconds.
///
/// Only the start, step and length are stored; element `k` is computed as
/// `start + k * step`, matching how `arange` builds its output. Call
/// [`to_vec`](TimeVector::to_vec) to get the `&[f64]` form every processing
/// function expects.
///
/// # Examples
///
/// ```
/// use rfpulse::TimeVector;
///
/// // 40 MHz sampling from -4 µs up to (but excluding) 4 µs
/// let t = TimeVector::from_sample_rate(-4e-6, 4e-6, 40e6).unwrap();
/// assert_eq!(t.len(), 320);
/// assert_eq!(t.sample_rate(), 40e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeVector {
    start: f64,
    step: f64,
    len: usize,
}

/// Largest sample count a `Vec<f64>` can allocate.
const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

impl TimeVector {
    /// Builds the half-open range `[start, stop)` sampled every `step` seconds.
    ///
    /// The length is `ceil((stop - start) / step)`, or zero when `stop` does
    /// not lie after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStep`] if `step` is not positive and finite,
    /// or so small that the range would hold more samples than a `Vec<f64>`
    /// can.
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidStep(step));
        }

        let span = (stop - start) / step;
        if span >= MAX_LEN as f64 {
            return Err(Error::InvalidStep(step));
        }
        let len = if span > 0.0 { span.ceil() as usize } else { 0 };

        Ok(Self { start, step, len })
    }

    /// Builds `[start, stop)` sampled at `sample_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] if `sample_rate` is not positive
    /// and finite.
    pub fn from_sample_rate(start: f64, stop: f64, sample_rate: f64) -> Result<Self> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Self::arange(start, stop, 1.0 / sample_rate)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sampling rate in Hz implied by the step.
    pub fn sample_rate(&self) -> f64 {
        1.0 / self.step
    }

    /// Timestamp at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.at(index))
    }

    /// Last timestamp, or `None` for an empty vector.
    pub fn last(&self) -> Option<f64> {
        self.len.checked_sub(1).map(|i| self.at(i))
    }

    /// Time spanned from the first to the last sample.
    pub fn duration(&self) -> f64 {
        match self.len {
            0 => 0.0,
            n => (n - 1) as f64 * self.step,
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.at(i))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    fn at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}
