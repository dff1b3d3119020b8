use thiserror::Error;

/// Unified error type for tag-manager operations
#[derive(Error, Debug)]
pub enum TagManagerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-manager
pub type Result<T> = std::result::Result<T, TagManagerError>;

impl TagManagerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagManagerError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TagManagerError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TagManagerError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        TagManagerError::Remote(msg.into())
    }
}
