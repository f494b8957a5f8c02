use thiserror::Error;

/// Error for ArtistId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtistIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all artist-related operations
#[derive(Debug, Clone, Error)]
pub enum ArtistError {
    #[error("Invalid artist ID: {0}")]
    InvalidArtistId(#[from] ArtistIdError),

    #[error("Artist name must not be empty")]
    EmptyName,

    #[error("Artist not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
