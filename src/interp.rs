//! Piecewise-linear interpolation over sampled data.

use crate::{Error, Result};

/// Linearly interpolates `fp` (sampled at increasing `xp`) at each query
/// point in `x`.
///
/// Queries below `xp[0]` return `left` and queries above the last
/// timestamp return `right`; nothing is extrapolated. A query that lands
/// exactly on a sample point returns that sample unchanged. Non-finite
/// queries are treated as out of range.
///
/// # Errors
///
/// - [`Error::EmptySignal`] if `xp` is empty
/// - [`Error::LengthMismatch`] if `xp` and `fp` differ in length
/// - [`Error::UnsortedTime`] if `xp` decreases anywhere or holds a
///   non-finite timestamp
///
/// # Examples
///
/// ```
/// use rfpulse::interp::interp;
///
/// let xp = [0.0, 1.0, 2.0];
/// let fp = [0.0, 10.0, 0.0];
/// let y = interp(&[-1.0, 0.5, 1.5, 3.0], &xp, &fp, 0.0, 0.0).unwrap();
/// assert_eq!(y, vec![0.0, 5.0, 5.0, 0.0]);
/// ```
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64], left: f64, right: f64) -> Result<Vec<f64>> {
    if xp.is_empty() {
        return Err(Error::EmptySignal);
    }
    if xp.len() != fp.len() {
        return Err(Error::LengthMismatch {
            expected: xp.len(),
            actual: fp.len(),
        });
    }
    if let Some(index) = xp.iter().position(|p| !p.is_finite()) {
        return Err(Error::UnsortedTime { index });
    }
    if let Some(index) = xp.windows(2).position(|w| w[1] < w[0]) {
        return Err(Error::UnsortedTime { index: index + 1 });
    }

    Ok(x.iter().map(|&xi| interp_one(xi, xp, fp, left, right)).collect())
}

fn interp_one(x: f64, xp: &[f64], fp: &[f64], left: f64, right: f64) -> f64 {
    let last = xp.len() - 1;

    if x.is_nan() || x < xp[0] {
        return left;
    }
    if x > xp[last] {
        return right;
    }
    if x == xp[last] {
        return fp[last];
    }

    // First index with xp[i] > x; x >= xp[0] so it is at least 1
    let upper = xp.partition_point(|&p| p <= x);
    let lower = upper - 1;

    let (x0, x1) = (xp[lower], xp[upper]);
    let (y0, y1) = (fp[lower], fp[upper]);
    if x == x0 {
        return y0;
    }

    let slope = (y1 - y0) / (x1 - x0);
    y0 + slope * (x - x0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_exact_points_return_samples() {
        let xp = [0.0, 0.1, 0.2, 0.3];
        let fp = [1.0, -2.0, 3.0, -4.0];
        let y = interp(&xp, &xp, &fp, 0.0, 0.0).unwrap();
        assert_eq!(y, fp.to_vec());
    }

    #[test]
    fn test_midpoints() {
        let xp = [0.0, 1.0, 2.0];
        let fp = [0.0, 2.0, -2.0];
        let y = interp(&[0.25, 1.5], &xp, &fp, 0.0, 0.0).unwrap();
        assert!(approx_eq(y[0], 0.5));
        assert!(approx_eq(y[1], 0.0));
    }

    #[test]
    fn test_out_of_range_uses_fill_values() {
        let xp = [0.0, 1.0];
        let fp = [5.0, 6.0];
        let y = interp(&[-0.5, 1.5, f64::NAN], &xp, &fp, -1.0, 7.0).unwrap();
        assert_eq!(y, vec![-1.0, 7.0, -1.0]);
    }

    #[test]
    fn test_infinite_queries() {
        let xp = [0.0, 1.0];
        let fp = [5.0, 6.0];
        let y = interp(&[f64::NEG_INFINITY, f64::INFINITY], &xp, &fp, 0.0, 0.0).unwrap();
        assert_eq!(y, vec![0.0, 0.0]);
    }

    #[test]
    fn test_single_point() {
        let y = interp(&[-1.0, 0.0, 1.0], &[0.0], &[3.0], 0.0, 0.0).unwrap();
        assert_eq!(y, vec![0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_duplicate_timestamps() {
        // Repeated xp values are allowed; the later sample wins at the tie
        let xp = [0.0, 1.0, 1.0, 2.0];
        let fp = [0.0, 1.0, 3.0, 3.0];
        let y = interp(&[1.0, 1.5], &xp, &fp, 0.0, 0.0).unwrap();
        assert_eq!(y, vec![3.0, 3.0]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(interp(&[0.0], &[], &[], 0.0, 0.0), Err(Error::EmptySignal));
        assert_eq!(
            interp(&[0.0], &[0.0, 1.0], &[0.0], 0.0, 0.0),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            interp(&[0.0], &[0.0, 2.0, 1.0], &[0.0; 3], 0.0, 0.0),
            Err(Error::UnsortedTime { index: 2 })
        );
    }

    #[test]
    fn test_non_finite_timestamps_rejected() {
        let fp = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(
            interp(&[1.5], &[f64::NAN, 1.0, 2.0, 3.0], &fp, 0.0, 0.0),
            Err(Error::UnsortedTime { index: 0 })
        );
        assert_eq!(
            interp(&[1.5], &[0.0, 1.0, f64::NAN, 3.0], &fp, 0.0, 0.0),
            Err(Error::UnsortedTime { index: 2 })
        );
        assert_eq!(
            interp(&[1.5], &[0.0, 1.0, 2.0, f64::INFINITY], &fp, 0.0, 0.0),
            Err(Error::UnsortedTime { index: 3 })
        );
    }
}
