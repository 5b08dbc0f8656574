//! Butterworth low-pass design.
//!
//! The analog prototype poles sit evenly on the left half of the unit
//! circle. They are scaled to the pre-warped cutoff and mapped to the z-plane
//! with the bilinear transform, which places every zero at `z = -1`. The
//! design uses a sample rate of 2, so the cutoff is given relative to
//! Nyquist.

use super::TransferFunction;
use crate::{Error, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Bilinear transform constant `2 · fs` for the normalized rate `fs = 2`.
const BILINEAR_K: f64 = 4.0;

/// Designs a digital Butterworth low-pass filter.
///
/// Butterworth filters have a maximally flat passband; the response is
/// exactly `1/√2` (-3 dB) at the cutoff.
///
/// # Arguments
///
/// * `order` - Filter order (number of poles)
/// * `wn` - Cutoff frequency as a fraction of Nyquist, `0 < wn < 1`
///
/// # Errors
///
/// - [`Error::InvalidOrder`] if `order` is zero
/// - [`Error::InvalidCutoff`] if `wn` is outside `(0, 1)`
///
/// # Examples
///
/// ```
/// use rfpulse::filters::butter_lowpass;
///
/// // 2 MHz cutoff at 40 MHz sampling
/// let tf = butter_lowpass(4, 2e6 / 20e6).unwrap();
/// assert_eq!(tf.order(), 4);
/// assert!((tf.gain(0.0) - 1.0).abs() < 1e-9);
/// ```
pub fn butter_lowpass(order: usize, wn: f64) -> Result<TransferFunction> {
    if order == 0 {
        return Err(Error::InvalidOrder(order));
    }
    if !(wn > 0.0 && wn < 1.0) {
        return Err(Error::InvalidCutoff { normalized: wn });
    }

    let warped = prewarp(wn);
    let analog: Vec<Complex64> = prototype_poles(order).iter().map(|&p| p * warped).collect();
    let analog_gain = warped.powi(order as i32);

    // Bilinear transform: s -> K (z - 1) / (z + 1)
    let digital: Vec<Complex64> = analog
        .iter()
        .map(|&p| (BILINEAR_K + p) / (BILINEAR_K - p))
        .collect();
    let denominator_scale: Complex64 = analog.iter().map(|&p| BILINEAR_K - p).product();
    let gain = analog_gain * (Complex64::new(1.0, 0.0) / denominator_scale).re;

    let zeros = vec![Complex64::new(-1.0, 0.0); order];
    let b: Vec<f64> = poly(&zeros).iter().map(|c| gain * c.re).collect();
    let a: Vec<f64> = poly(&digital).iter().map(|c| c.re).collect();

    log::debug!("butterworth order {order}, wn {wn}: b = {b:?}, a = {a:?}");

    TransferFunction::new(b, a)
}

/// Analog cutoff (rad/s at `fs = 2`) that lands on `wn` after the bilinear
/// transform.
fn prewarp(wn: f64) -> f64 {
    BILINEAR_K * (PI * wn / 2.0).tan()
}

/// Normalized analog prototype poles, `-exp(jπm / 2N)` for
/// `m = -N+1, -N+3, ..., N-1`.
fn prototype_poles(order: usize) -> Vec<Complex64> {
    let n = order as f64;
    (0..order)
        .map(|k| {
            let m = 2.0 * k as f64 - (n - 1.0);
            -Complex64::from_polar(1.0, PI * m / (2.0 * n))
        })
        .collect()
}

/// Expands `∏ (x - r)` into polynomial coefficients, highest power first.
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= root * c;
        }
        coeffs = next;
    }
    coeffs
}
