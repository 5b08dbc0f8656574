//! Phase delay by resampling on a shifted time base.

use crate::interp::interp;
use crate::{Error, Result};
use std::f64::consts::PI;

/// Converts a carrier phase (radians) into the equivalent time offset at
/// `freq` Hz: `phase / (2π · freq)`.
///
/// # Examples
///
/// ```
/// use rfpulse::phase_to_time_offset;
///
/// // A quarter cycle at 2 MHz is 125 ns
/// let dt = phase_to_time_offset(std::f64::consts::FRAC_PI_2, 2e6);
/// assert!((dt - 125e-9).abs() < 1e-18);
/// ```
pub fn phase_to_time_offset(phase: f64, freq: f64) -> f64 {
    phase / (2.0 * PI * freq)
}

/// Delays `signal` by the time equivalent of `phase` at carrier `freq`.
///
/// The signal is linearly interpolated at `t - shift`. Query points that
/// fall outside `[t[0], t[n-1]]` become exactly zero. A zero phase returns
/// the input unchanged. A zero frequency gives a non-finite offset, which
/// moves every query point out of range and yields all zeros.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `signal` and `t` differ in length
/// - [`Error::EmptySignal`] if both are empty
/// - [`Error::UnsortedTime`] if `t` decreases anywhere or is not finite
///
/// # Examples
///
/// ```
/// use rfpulse::time_shift;
///
/// let t = [0.0, 1.0, 2.0, 3.0];
/// let x = [1.0, 2.0, 3.0, 4.0];
/// // One full second of delay at 1 Hz is a phase of 2π
/// let y = time_shift(&x, &t, 2.0 * std::f64::consts::PI, 1.0).unwrap();
/// assert_eq!(y, vec![0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn time_shift(signal: &[f64], t: &[f64], phase: f64, freq: f64) -> Result<Vec<f64>> {
    if signal.len() != t.len() {
        return Err(Error::LengthMismatch {
            expected: t.len(),
            actual: signal.len(),
        });
    }

    let shift = phase_to_time_offset(phase, freq);
    log::debug!(
        "shifting {} samples by {:.4} rad at {} Hz ({:e} s)",
        signal.len(),
        phase,
        freq,
        shift
    );

    let query: Vec<f64> = t.iter().map(|&ti| ti - shift).collect();
    interp(&query, t, signal, 0.0, 0.0)
}
