//! Error types for module construction and invocation.

use thiserror::Error;

/// Invalid hyperparameters, reported when a module is constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gamma must be finite and within [-1, 1], got {0}")]
    GammaOutOfRange(f64),

    #[error("c must be an integer >= 1, got {0}")]
    InvalidInverseGamma(f64),

    #[error("frame length must be >= 1, got {0}")]
    InvalidFrameLength(usize),

    #[error("impulse response length must be >= 1, got {0}")]
    InvalidImpulseResponseLength(usize),
}

/// The input tensor does not satisfy a module's shape contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{module}: expected trailing dimension {expected}, got {actual}")]
    TrailingDimMismatch {
        module: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{module}: trailing dimension must be at least {required}, got {actual}")]
    TrailingDimTooShort {
        module: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("{module}: input must have rank >= 1")]
    ScalarInput { module: &'static str },
}
