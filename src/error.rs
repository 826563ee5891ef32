//! Error types for vectorizar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for vectorizar operations.
///
/// Every "not ready" condition surfaces as a typed error carrying the
/// guidance a caller needs to recover, instead of a printed hint.
///
/// # Examples
///
/// ```
/// use vectorizar::error::VectorizarError;
///
/// let err = VectorizarError::VocabularyNotBuilt;
/// assert!(err.to_string().contains("fit()"));
/// ```
#[derive(Debug)]
pub enum VectorizarError {
    /// Vocabulary has not been built yet; call `fit()` first.
    VocabularyNotBuilt,

    /// The flattened corpus passed to the vocabulary builder was empty.
    EmptyCorpus,

    /// Vocabulary was already built; a processor fits exactly once.
    VocabularyAlreadyBuilt,

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for VectorizarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorizarError::VocabularyNotBuilt => {
                write!(f, "Vocabulary not built: call fit() with sample texts first")
            }
            VectorizarError::EmptyCorpus => {
                write!(f, "Empty corpus: no texts to build a vocabulary from")
            }
            VectorizarError::VocabularyAlreadyBuilt => {
                write!(
                    f,
                    "Vocabulary already built: a TextProcessor fits exactly once"
                )
            }
            VectorizarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            VectorizarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for VectorizarError {}

impl From<&str> for VectorizarError {
    fn from(msg: &str) -> Self {
        VectorizarError::Other(msg.to_string())
    }
}

impl From<String> for VectorizarError {
    fn from(msg: String) -> Self {
        VectorizarError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, VectorizarError>;
