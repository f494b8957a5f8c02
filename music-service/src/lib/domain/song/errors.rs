use thiserror::Error;

/// Error for SongId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SongIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for language tag parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unknown language tag: {0}")]
    Unknown(String),
}

/// Top-level error for all song-related operations
#[derive(Debug, Clone, Error)]
pub enum SongError {
    #[error("Invalid song ID: {0}")]
    InvalidSongId(#[from] SongIdError),

    #[error("Invalid language: {0}")]
    InvalidLanguage(#[from] LanguageError),

    #[error("Song title must not be empty")]
    EmptyTitle,

    #[error("Song duration must be positive, got {0}")]
    InvalidDuration(i32),

    #[error("No songs matched the search")]
    NoMatches,

    #[error("Referenced album not found: {0}")]
    AlbumNotFound(String),

    #[error("Referenced artist not found: {0}")]
    ArtistNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
