//! Error types for ReviewGuard

/// Result type alias using ReviewGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ReviewGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid review input (rating out of range, oversized text, ...)
    #[error("validation error: {0}")]
    Validation(String),

    /// Feature extraction failures
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
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
