#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

/// Simplified `Result` using [`LinRegError`](crate::LinRegError) as error type
pub type Result<T> = std::result::Result<T, LinRegError>;

/// Error variants of the gradient descent regression
///
/// All errors are raised at the point of malformed input; there is no retry
/// or recovery path inside the crate.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Error, Debug, Clone)]
pub enum LinRegError {
    /// Indicate mis-configured hyperparameters
    #[error("invalid hyperparameter: {0}")]
    InvalidParams(String),
    /// Feature matrix, target vector and parameter vector disagree in shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    /// The bounds handed to the feature generator are inconsistent
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    /// The input has no samples
    #[error("not enough samples, the feature matrix has no rows")]
    NotEnoughSamples,
    /// A trained parameter vector was requested from a zero-iteration run
    #[error("no history recorded, the optimizer ran for zero iterations")]
    EmptyHistory,
}
