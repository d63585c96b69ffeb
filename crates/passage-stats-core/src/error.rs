//! Error types for passage-stats-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during passage analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// No sentence in the passage contains the requested word.
    #[error("no sentence contains \"{word}\"")]
    SentenceNotFound {
        /// The word that was searched for.
        word: String,
    },

    /// More top-ranked words were requested than the passage has.
    #[error("requested the top {requested} words but the passage only has {available} distinct words")]
    InsufficientWords {
        /// Number of entries the caller asked for.
        requested: usize,
        /// Number of distinct words in the ranked list.
        available: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
