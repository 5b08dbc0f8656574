//! Streaming sample source trait.

/// Common interface for anything that can produce samples one at a time.
///
/// Most of the crate works on whole slices, but generators such as the pulse
/// source or white noise can also be pulled sample by sample.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Fills a buffer with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A constant value is the simplest signal: DC.
///
/// # Examples
///
/// ```
/// use rfpulse::Signal;
///
/// let mut dc = 0.5_f64;
/// let mut buffer = vec![0.0; 4];
/// dc.process(&mut buffer);
/// assert_eq!(buffer, vec![0.5, 0.5, 0.5, 0.5]);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp(f64);

    impl Signal for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_default_process_calls_next_sample() {
        let mut ramp = Ramp(0.0);
        let mut buffer = [0.0; 3];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_constant_signal() {
        let mut dc = -0.25_f64;
        assert_eq!(dc.next_sample(), -0.25);
        assert_eq!(dc.next_sample(), -0.25);
    }
}
