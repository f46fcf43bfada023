//! Error types for the banditlab library.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while configuring a simulation.
///
/// Everything here is a configuration failure: once a simulation has been
/// built from validated parts, running it cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The bandit was configured with zero arms.
    #[error("no arms available")]
    NoArmsAvailable,

    /// Mismatch between the declared arm count and the supplied arm means.
    #[error("dimension mismatch: {message}")]
    DimensionMismatch { message: String },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Builder configuration error.
    #[error("builder error: {message}")]
    BuilderError { message: String },
}

impl SimError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            message: message.into(),
        }
    }
}
