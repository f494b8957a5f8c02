use thiserror::Error;

/// Error for HighlightId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HighlightIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all highlight operations
#[derive(Debug, Clone, Error)]
pub enum HighlightError {
    #[error("Invalid highlight ID: {0}")]
    InvalidHighlightId(#[from] HighlightIdError),

    #[error("Play count must not be negative, got {0}")]
    NegativePlayCount(i32),

    #[error("Highlight not found: {0}")]
    NotFound(String),

    #[error("Referenced song not found: {0}")]
    SongNotFound(String),

    #[error("Referenced playlist not found: {0}")]
    PlaylistNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
