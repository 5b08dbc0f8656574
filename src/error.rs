//! Error type shared by every fallible operation in the crate.

/// Errors produced while building time bases, designing filters or
/// processing signals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two sequences that must line up sample-for-sample do not.
    #[error("length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("signal is empty")]
    EmptySignal,

    /// The signal cannot cover the edge padding used by zero-phase filtering.
    #[error("signal of {len} samples is too short, need more than {min}")]
    SignalTooShort { len: usize, min: usize },

    /// Normalized cutoff (relative to Nyquist) outside the open interval (0, 1).
    #[error("normalized cutoff must satisfy 0 < wn < 1, got {normalized}")]
    InvalidCutoff { normalized: f64 },

    #[error("filter order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// Transfer function coefficients that cannot describe a filter.
    #[error("invalid filter coefficients: {0}")]
    InvalidCoefficients(&'static str),

    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    /// Timestamps must be finite and non-decreasing for interpolation.
    #[error("time vector is not sorted at index {index}")]
    UnsortedTime { index: usize },

    /// The filter's steady-state system had no unique solution.
    #[error("filter steady-state system is singular")]
    SingularSystem,

    #[cfg(feature = "plot")]
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
