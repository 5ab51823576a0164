//! Error types for Moodline

/// Result type alias using Moodline's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Moodline operations.
///
/// Only initialization paths (lexicon loading, downloads, configuration)
/// produce these. Scoring and aggregation never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lexicon parsing or validation errors
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// Lexicon download errors
    #[error("download error: {0}")]
    Download(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new lexicon error
    pub fn lexicon(msg: impl Into<String>) -> Self {
        Self::Lexicon(msg.into())
    }

    /// Create a new download error
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
