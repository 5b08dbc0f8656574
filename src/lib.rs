//! rfpulse - RF pulse generation, phase shifting and I/Q demodulation
//!
//! This library provides small building blocks for exploring radio-frequency
//! signals held entirely in memory:
//! - Sine bursts gated to a whole number of carrier cycles
//! - Phase delays applied by resampling on a shifted time base
//! - I/Q demodulation with a zero-phase Butterworth low-pass
//!
//! # Examples
//!
//! ```
//! use rfpulse::{generate_pulse, iq_demodulate, time_shift, TimeVector};
//!
//! let fs = 40e6;
//! let freq = 2e6;
//! let t = TimeVector::from_sample_rate(-4e-6, 4e-6, fs).unwrap().to_vec();
//!
//! let pulse = generate_pulse(&t, freq, 5);
//! let delayed = time_shift(&pulse, &t, std::f64::consts::FRAC_PI_4, freq).unwrap();
//! let (i, q) = iq_demodulate(&delayed, &t, freq, fs, None).unwrap();
//! assert_eq!(i.len(), t.len());
//! assert_eq!(q.len(), t.len());
//! ```

pub mod demod;
mod error;
pub mod filters;
pub mod interp;
pub mod noise;
#[cfg(feature = "plot")]
pub mod plot;
pub mod pulse;
mod shift;
pub mod signals;

// Re-export commonly used types at the crate root
pub use demod::{IqComponents, IqDemodulator, iq_demodulate, mix_down};
pub use error::{Error, Result};
pub use noise::WhiteNoise;
pub use pulse::{BurstSource, SineBurst, generate_pulse};
pub use shift::{phase_to_time_offset, time_shift};
pub use signals::{Signal, TimeVector};
