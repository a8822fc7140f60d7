//! Error types for mean-variance simulation.

use thiserror::Error;

/// Result type alias for mean-variance operations.
pub type Result<T> = std::result::Result<T, MeanVarError>;

/// Error types for simulation and frontier estimation.
#[derive(Error, Debug)]
pub enum MeanVarError {
    /// Optimizer name not found in the registry.
    #[error("Unknown optimizer: no factory registered under '{name}'")]
    UnknownOptimizer { name: String },

    /// Frontier sweep invoked on an empty distribution.
    #[error("Empty distribution: cannot compute a target-return range for {context}")]
    EmptyDistribution { context: String },

    /// A sampled weight row summed to zero and re-sampling gave up.
    #[error("Degenerate weights: row summed to zero after {attempts} re-sampling attempts")]
    DegenerateWeights { attempts: usize },

    /// Weight vector length does not match the asset count.
    #[error("Weight length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl MeanVarError {
    /// Create an unknown-optimizer error.
    pub fn unknown_optimizer(name: impl Into<String>) -> Self {
        Self::UnknownOptimizer { name: name.into() }
    }

    /// Create an empty-distribution error.
    pub fn empty_distribution(context: impl Into<String>) -> Self {
        Self::EmptyDistribution {
            context: context.into(),
        }
    }

    /// Create a degenerate-weights error.
    pub fn degenerate_weights(attempts: usize) -> Self {
        Self::DegenerateWeights { attempts }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
