//! Zero-phase forward-backward filtering.

use super::{Sample, TransferFunction};
use crate::{Error, Result};

/// Number of samples reflected onto each end of the signal before
/// filtering: three times the coefficient count.
pub fn padding_len(tf: &TransferFunction) -> usize {
    3 * tf.taps()
}

/// Applies `tf` forwards and then backwards so the phase shifts cancel.
///
/// The result has no group delay and the magnitude response squared. The
/// signal is first extended at both ends with an odd reflection about its
/// end samples, and each pass starts from the filter's steady state scaled
/// to the first sample it sees, so the edges do not ring.
///
/// This needs the whole signal up front; it cannot run causally.
///
/// # Errors
///
/// - [`Error::SignalTooShort`] if `x` is not longer than
///   [`padding_len`]
/// - [`Error::SingularSystem`] if the filter has no steady state
///
/// # Examples
///
/// ```
/// use rfpulse::filters::{butter_lowpass, filtfilt};
///
/// let tf = butter_lowpass(4, 0.1).unwrap();
/// let dc = vec![2.0; 64];
/// let y = filtfilt(&tf, &dc).unwrap();
/// assert!(y.iter().all(|v| (v - 2.0).abs() < 1e-9));
/// ```
pub fn filtfilt<T: Sample>(tf: &TransferFunction, x: &[T]) -> Result<Vec<T>> {
    let edge = padding_len(tf);
    if x.len() <= edge {
        return Err(Error::SignalTooShort {
            len: x.len(),
            min: edge,
        });
    }

    let zi = tf.steady_state()?;
    let scaled = |first: T| -> Vec<T> { zi.iter().map(|&z| first * z).collect() };

    let extended = odd_extend(x, edge);
    let mut forward = tf.lfilter_from(&extended, &scaled(extended[0]))?;

    forward.reverse();
    let mut backward = tf.lfilter_from(&forward, &scaled(forward[0]))?;
    backward.reverse();

    Ok(backward[edge..backward.len() - edge].to_vec())
}

/// Point-reflects `edge` samples about each end:
/// `2·x[0] - x[edge..0]` before and `2·x[n-1] - x[n-2..n-edge-1]` after.
///
/// Callers guarantee `x.len() > edge`.
fn odd_extend<T: Sample>(x: &[T], edge: usize) -> Vec<T> {
    let n = x.len();
    let first = x[0];
    let last = x[n - 1];

    let mut extended = Vec::with_capacity(n + 2 * edge);
    extended.extend((1..=edge).rev().map(|i| first * 2.0 - x[i]));
    extended.extend_from_slice(x);
    extended.extend((0..edge).map(|i| last * 2.0 - x[n - 2 - i]));
    extended
}
