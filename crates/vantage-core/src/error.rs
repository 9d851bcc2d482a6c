/// Core error types for the Vantage toolkit.
use std::path::PathBuf;

/// A specialized Result type for Vantage operations.
pub type VantageResult<T> = Result<T, VantageError>;

/// Top-level error type encompassing all Vantage subsystems.
#[derive(Debug, thiserror::Error)]
pub enum VantageError {
    #[error("config error: {0}")]
    Config(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("compose error: {0}")]
    Compose(String),

    #[error("asset error: {message} ({path:?})")]
    Asset { message: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl VantageError {
    /// Create a host error.
    pub fn host(message: impl Into<String>) -> Self {
        VantageError::Host(message.into())
    }

    /// Create an asset error.
    pub fn asset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        VantageError::Asset {
            message: message.into(),
            path: path.into(),
        }
    }
}
