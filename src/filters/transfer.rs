//! Rational transfer functions and direct-form filtering.

use crate::{Error, Result};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

/// Sample types a real-coefficient filter can run over.
///
/// Implemented for `f64` and `Complex64`, so the same coefficients filter
/// both a real signal and a mixed-down complex baseband.
pub trait Sample: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self> {
    const ZERO: Self;
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
}

impl Sample for Complex64 {
    const ZERO: Self = Complex64::new(0.0, 0.0);
}

/// A digital filter `H(z) = B(z) / A(z)` with real coefficients.
///
/// Transfer function:
/// `H(z) = (b0 + b1*z^-1 + ... + bn*z^-n) / (1 + a1*z^-1 + ... + an*z^-n)`
///
/// Both coefficient vectors are zero-padded to the same length and
/// normalized so that `a[0] == 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator (feedforward) coefficients
    b: Vec<f64>,
    /// Denominator (feedback) coefficients, `a[0] == 1`
    a: Vec<f64>,
}

impl TransferFunction {
    /// Creates a transfer function from numerator and denominator
    /// coefficients, highest power of `z^-1` last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficients`] if either side is empty or the
    /// leading denominator coefficient is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfpulse::filters::TransferFunction;
    ///
    /// // Two-tap moving average, written with a non-unit a[0]
    /// let tf = TransferFunction::new(vec![1.0, 1.0], vec![2.0]).unwrap();
    /// assert_eq!(tf.numerator(), &[0.5, 0.5]);
    /// assert_eq!(tf.denominator(), &[1.0, 0.0]);
    /// ```
    pub fn new(b: Vec<f64>, a: Vec<f64>) -> Result<Self> {
        if b.is_empty() {
            return Err(Error::InvalidCoefficients("numerator is empty"));
        }
        let a0 = match a.first() {
            Some(&a0) if a0 != 0.0 => a0,
            Some(_) => {
                return Err(Error::InvalidCoefficients(
                    "leading denominator coefficient is zero",
                ));
            }
            None => return Err(Error::InvalidCoefficients("denominator is empty")),
        };

        let taps = b.len().max(a.len());
        let normalize = |mut coeffs: Vec<f64>| {
            coeffs.resize(taps, 0.0);
            coeffs.iter_mut().for_each(|c| *c /= a0);
            coeffs
        };

        Ok(Self {
            b: normalize(b),
            a: normalize(a),
        })
    }

    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    pub fn denominator(&self) -> &[f64] {
        &self.a
    }

    /// Number of coefficients on each side (order + 1).
    pub fn taps(&self) -> usize {
        self.a.len()
    }

    pub fn order(&self) -> usize {
        self.taps() - 1
    }

    /// Complex frequency response at normalized frequency `w`
    /// (1.0 is Nyquist).
    pub fn response(&self, w: f64) -> Complex64 {
        let z_inv = Complex64::from_polar(1.0, -PI * w);
        let eval = |coeffs: &[f64]| {
            coeffs
                .iter()
                .rev()
                .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
        };
        eval(&self.b) / eval(&self.a)
    }

    /// Magnitude of the frequency response at normalized frequency `w`.
    pub fn gain(&self, w: f64) -> f64 {
        self.response(w).norm()
    }

    /// Filters `x` starting from a zero state.
    pub fn lfilter<T: Sample>(&self, x: &[T]) -> Vec<T> {
        self.run(x, vec![T::ZERO; self.order()])
    }

    /// Filters `x` starting from the given internal state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] unless `state` has exactly
    /// [`order`](Self::order) entries.
    pub fn lfilter_from<T: Sample>(&self, x: &[T], state: &[T]) -> Result<Vec<T>> {
        if state.len() != self.order() {
            return Err(Error::LengthMismatch {
                expected: self.order(),
                actual: state.len(),
            });
        }
        Ok(self.run(x, state.to_vec()))
    }

    /// Direct Form II Transposed.
    fn run<T: Sample>(&self, x: &[T], mut z: Vec<T>) -> Vec<T> {
        let n = self.order();
        let mut y = Vec::with_capacity(x.len());

        for &input in x {
            let output = input * self.b[0] + z.first().copied().unwrap_or(T::ZERO);
            for i in 0..n {
                let carry = if i + 1 < n { z[i + 1] } else { T::ZERO };
                z[i] = input * self.b[i + 1] + carry - output * self.a[i + 1];
            }
            y.push(output);
        }

        y
    }

    /// Internal state that makes the filter's output already settled for a
    /// unit step input.
    ///
    /// Scaling this state by the first input sample suppresses the start-up
    /// transient. Solves `(I - Aᵀ) zi = b[1..] - a[1..] · b[0]` where `A` is
    /// the companion matrix of the denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularSystem`] when the filter has a pole at
    /// `z = 1` and no steady state exists.
    pub fn steady_state(&self) -> Result<Vec<f64>> {
        let n = self.order();
        if n == 0 {
            return Ok(Vec::new());
        }

        let (a, b) = (&self.a, &self.b);
        let system = DMatrix::from_fn(n, n, |i, j| {
            let identity = if i == j { 1.0 } else { 0.0 };
            let first_column = if j == 0 { a[i + 1] } else { 0.0 };
            let superdiagonal = if j == i + 1 { 1.0 } else { 0.0 };
            identity + first_column - superdiagonal
        });
        let rhs = DVector::from_iterator(n, (0..n).map(|i| b[i + 1] - a[i + 1] * b[0]));

        let zi = system.lu().solve(&rhs).ok_or(Error::SingularSystem)?;
        if zi.iter().any(|v| !v.is_finite()) {
            return Err(Error::SingularSystem);
        }
        Ok(zi.iter().copied().collect())
    }
}
