//! Digital filter design and application.
//!
//! This module provides:
//! - `TransferFunction` for rational `B(z) / A(z)` filters with real
//!   coefficients, applied to real or complex samples
//! - `butter_lowpass` for Butterworth low-pass design
//! - `filtfilt` for zero-phase forward-backward filtering

mod butterworth;
mod filtfilt;
mod transfer;

pub use butterworth::butter_lowpass;
pub use filtfilt::{filtfilt, padding_len};
pub use transfer::{Sample, TransferFunction};
