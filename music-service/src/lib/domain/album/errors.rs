use thiserror::Error;

/// Error for AlbumId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlbumIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all album-related operations
#[derive(Debug, Clone, Error)]
pub enum AlbumError {
    #[error("Invalid album ID: {0}")]
    InvalidAlbumId(#[from] AlbumIdError),

    #[error("Album title must not be empty")]
    EmptyTitle,

    #[error("Album not found: {0}")]
    NotFound(String),

    #[error("Referenced artist not found: {0}")]
    ArtistNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
