use thiserror::Error;

/// Error for PlayLogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayLogIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all play log operations
#[derive(Debug, Clone, Error)]
pub enum PlayLogError {
    #[error("Invalid play log ID: {0}")]
    InvalidPlayLogId(#[from] PlayLogIdError),

    #[error("Referenced user not found: {0}")]
    UserNotFound(String),

    #[error("Referenced song not found: {0}")]
    SongNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
