//! Uniform white noise for corrupting test signals.

use crate::Signal;
use rand::Rng;

/// Uniformly distributed noise in `[-amplitude, amplitude]`.
///
/// Useful for checking how well a demodulated phase holds up when the
/// received pulse is not clean.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    amplitude: f64,
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Noise drawn from the thread-local generator. Negative amplitudes are
    /// treated as their magnitude; NaN or infinite amplitudes give silence.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfpulse::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.1);
    /// let sample = noise.next_sample();
    /// assert!(sample.abs() <= 0.1);
    /// ```
    pub fn new(amplitude: f64) -> Self {
        Self {
            amplitude: peak_amplitude(amplitude),
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Noise drawn from a caller-supplied generator, e.g. a seeded `StdRng`
    /// for reproducible tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfpulse::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(0.2, rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Self {
        Self {
            amplitude: peak_amplitude(amplitude),
            rng,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Returns a copy of `signal` with noise added to every sample.
    pub fn add_to(&mut self, signal: &[f64]) -> Vec<f64> {
        signal.iter().map(|&s| s + self.next_sample()).collect()
    }
}

/// A uniform range needs finite bounds.
fn peak_amplitude(amplitude: f64) -> f64 {
    if amplitude.is_finite() {
        amplitude.abs()
    } else {
        log::warn!("noise amplitude {amplitude} is not finite, generating silence");
        0.0
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_sample_range() {
        let mut noise = WhiteNoise::new(0.5);
        for _ in 0..10000 {
            let sample = noise.next_sample();
            assert!((-0.5..=0.5).contains(&sample));
        }
    }

    #[test]
    fn test_samples_vary() {
        let mut noise = WhiteNoise::new(-1.0);
        assert_eq!(noise.amplitude(), 1.0);
        let first = noise.next_sample();
        assert!((0..100).any(|_| noise.next_sample() != first));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = WhiteNoise::with_rng(1.0, StdRng::seed_from_u64(7));
        let mut b = WhiteNoise::with_rng(1.0, StdRng::seed_from_u64(7));
        for _ in 0..32 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }

    #[test]
    fn test_zero_amplitude_is_silent() {
        let mut noise = WhiteNoise::with_rng(0.0, StdRng::seed_from_u64(1));
        let mut buffer = vec![1.0; 16];
        noise.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_non_finite_amplitude_is_silent() {
        for amplitude in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut noise = WhiteNoise::with_rng(amplitude, StdRng::seed_from_u64(5));
            assert_eq!(noise.amplitude(), 0.0);
            assert_eq!(noise.next_sample(), 0.0);
        }

        let mut noise = WhiteNoise::new(f64::INFINITY);
        assert_eq!(noise.add_to(&[0.25, -0.25]), vec![0.25, -0.25]);
    }

    #[test]
    fn test_add_to() {
        let mut noise = WhiteNoise::with_rng(0.1, StdRng::seed_from_u64(3));
        let clean = vec![1.0; 64];
        let noisy = noise.add_to(&clean);
        assert_eq!(noisy.len(), clean.len());
        assert!(noisy.iter().all(|&s| (s - 1.0).abs() <= 0.1));
        assert!(noisy.iter().any(|&s| s != 1.0));
    }
}
