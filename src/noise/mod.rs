//! Noise generators.
//!
//! Used to corrupt clean pulses before demodulation.

mod white;

pub use white::WhiteNoise;
