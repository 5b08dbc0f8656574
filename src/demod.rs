//! I/Q demodulation.
//!
//! A real passband signal is mixed down with `exp(+j·2π·f·t)`, which moves
//! the carrier to DC and its image to `2f`. A zero-phase Butterworth
//! low-pass then removes the image, leaving the complex baseband envelope.
//! Its real part is the in-phase (I) component and its imaginary part the
//! quadrature (Q) component.
//!
//! With this convention a unit sine carrier `sin(2π·f·t)` demodulates to
//! `I ≈ 0, Q ≈ 0.5`, and delaying it by a phase `φ` rotates the baseband
//! phasor by `φ`.

use crate::filters::{butter_lowpass, filtfilt};
use crate::{Error, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Low-pass order used unless overridden.
pub const DEFAULT_ORDER: usize = 4;

/// In-phase and quadrature components of a demodulated signal.
#[derive(Debug, Clone, PartialEq)]
pub struct IqComponents {
    /// In-phase component (real part of the baseband)
    pub i: Vec<f64>,
    /// Quadrature component (imaginary part of the baseband)
    pub q: Vec<f64>,
}

impl IqComponents {
    fn from_complex(baseband: &[Complex64]) -> Self {
        Self {
            i: baseband.iter().map(|z| z.re).collect(),
            q: baseband.iter().map(|z| z.im).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    /// Envelope `sqrt(I² + Q²)` per sample.
    pub fn magnitude(&self) -> Vec<f64> {
        self.i.iter().zip(&self.q).map(|(i, q)| i.hypot(*q)).collect()
    }

    /// Phasor angle `atan2(Q, I)` per sample, in radians.
    pub fn phase(&self) -> Vec<f64> {
        self.i.iter().zip(&self.q).map(|(i, q)| q.atan2(*i)).collect()
    }

    /// Phasor angle at a single sample.
    pub fn phase_at(&self, index: usize) -> Option<f64> {
        Some(self.q.get(index)?.atan2(*self.i.get(index)?))
    }

    pub fn to_complex(&self) -> Vec<Complex64> {
        self.i
            .iter()
            .zip(&self.q)
            .map(|(&i, &q)| Complex64::new(i, q))
            .collect()
    }

    /// Splits into `(I, Q)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.i, self.q)
    }
}

/// Configurable I/Q demodulator.
///
/// # Examples
///
/// ```
/// use rfpulse::{IqDemodulator, SineBurst, TimeVector};
///
/// let t = TimeVector::from_sample_rate(-4e-6, 4e-6, 40e6).unwrap().to_vec();
/// let pulse = SineBurst::new(2e6, 5).generate(&t);
///
/// let iq = IqDemodulator::new(2e6, 40e6).demodulate(&pulse, &t).unwrap();
///
/// // Pulse center at 1.25 µs
/// let center = 210;
/// assert!(iq.i[center].abs() < 0.05);
/// assert!((iq.q[center] - 0.5).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqDemodulator {
    /// Carrier frequency in Hz
    carrier: f64,
    /// Sample rate in Hz
    sample_rate: f64,
    /// Low-pass cutoff in Hz; `None` means the carrier frequency
    cutoff: Option<f64>,
    /// Butterworth order
    order: usize,
}

impl IqDemodulator {
    /// Creates a demodulator for `carrier` Hz at `sample_rate` Hz, with a
    /// 4th-order low-pass at the carrier frequency.
    pub fn new(carrier: f64, sample_rate: f64) -> Self {
        Self {
            carrier,
            sample_rate,
            cutoff: None,
            order: DEFAULT_ORDER,
        }
    }

    /// Overrides the low-pass cutoff frequency in Hz.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Overrides the low-pass order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn carrier(&self) -> f64 {
        self.carrier
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Effective low-pass cutoff in Hz.
    pub fn cutoff(&self) -> f64 {
        self.cutoff.unwrap_or(self.carrier)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Cutoff relative to Nyquist.
    pub fn normalized_cutoff(&self) -> f64 {
        self.cutoff() / (self.sample_rate / 2.0)
    }

    /// Demodulates `signal` sampled at times `t`.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if `signal` and `t` differ in length
    /// - [`Error::InvalidOrder`] or [`Error::InvalidCutoff`] for an
    ///   unrealisable low-pass
    /// - [`Error::SignalTooShort`] if the signal cannot cover the
    ///   zero-phase filter's edge padding
    pub fn demodulate(&self, signal: &[f64], t: &[f64]) -> Result<IqComponents> {
        let mixed = mix_down(signal, t, self.carrier)?;

        let tf = butter_lowpass(self.order, self.normalized_cutoff())?;
        let baseband = filtfilt(&tf, &mixed)?;

        log::debug!(
            "demodulated {} samples: carrier {} Hz, cutoff {} Hz, order {}",
            signal.len(),
            self.carrier,
            self.cutoff(),
            self.order
        );

        Ok(IqComponents::from_complex(&baseband))
    }
}

/// Mixes a real signal down to baseband: `signal · exp(+j·2π·freq·t)`.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if `signal` and `t` differ in length.
pub fn mix_down(signal: &[f64], t: &[f64], freq: f64) -> Result<Vec<Complex64>> {
    if signal.len() != t.len() {
        return Err(Error::LengthMismatch {
            expected: t.len(),
            actual: signal.len(),
        });
    }

    Ok(signal
        .iter()
        .zip(t)
        .map(|(&x, &ti)| Complex64::from_polar(x, 2.0 * PI * freq * ti))
        .collect())
}

/// Demodulates `input` into `(I, Q)` with a 4th-order zero-phase
/// Butterworth low-pass.
///
/// # Arguments
///
/// * `input` - Real passband signal
/// * `t` - Sample times in seconds, same length as `input`
/// * `freq` - Carrier frequency in Hz
/// * `fs` - Sample rate in Hz
/// * `cutoff` - Low-pass cutoff in Hz; defaults to `freq`
///
/// # Errors
///
/// See [`IqDemodulator::demodulate`].
pub fn iq_demodulate(
    input: &[f64],
    t: &[f64],
    freq: f64,
    fs: f64,
    cutoff: Option<f64>,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut demodulator = IqDemodulator::new(freq, fs);
    if let Some(cutoff) = cutoff {
        demodulator = demodulator.with_cutoff(cutoff);
    }
    Ok(demodulator.demodulate(input, t)?.into_parts())
}
