//! Finite-duration sinusoidal pulses.
//!
//! A pulse is a sine carrier gated to the window `[0, n_cycles / frequency]`.
//! It can be rendered over an arbitrary time vector or streamed sample by
//! sample over an evenly spaced time base.

mod sine_burst;

pub use sine_burst::{BurstSource, SineBurst};

/// Generates a sinusoidal pulse with `n_cycles` cycles of `freq` Hz.
///
/// Samples inside `[0, n_cycles / freq]` are `sin(2π · freq · t)`, all others
/// are zero. The output always has the same length as `t`.
///
/// # Examples
///
/// ```
/// use rfpulse::generate_pulse;
///
/// let t = [-0.25, 0.0, 0.25, 0.5, 0.75, 1.0, 1.25];
/// let pulse = generate_pulse(&t, 1.0, 1);
/// assert_eq!(pulse[0], 0.0);
/// assert!((pulse[2] - 1.0).abs() < 1e-12);
/// assert_eq!(pulse[6], 0.0);
/// ```
pub fn generate_pulse(t: &[f64], freq: f64, n_cycles: i32) -> Vec<f64> {
    SineBurst::new(freq, n_cycles).generate(t)
}
