use thiserror::Error;

/// Custom error types for wmark
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Invalid position mode '{0}', expected one of: tl, tr, bl, br, random")]
    InvalidPositionMode(String),

    #[error("External tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command '{0}' failed: {1}")]
    CommandFailed(String, String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for wmark operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
