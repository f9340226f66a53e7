//! Error types for readscore-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A config source was missing, unparsable or held a mistyped value.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during readability analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The aggregates have no words or no sentences, so every formula
    /// would divide by zero.
    #[error("cannot score text with {words} words and {sentences} sentences")]
    DegenerateInput {
        /// Word count of the rejected aggregates.
        words: usize,
        /// Sentence count of the rejected aggregates.
        sentences: usize,
    },

    /// An unknown score selection was provided.
    #[error("unknown score: {token}. Use: {available}")]
    UnknownSelection {
        /// The selection token that was requested.
        token: String,
        /// Comma-separated list of accepted tokens.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
