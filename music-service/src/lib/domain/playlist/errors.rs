use thiserror::Error;

/// Error for PlaylistId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaylistIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all playlist-related operations
#[derive(Debug, Clone, Error)]
pub enum PlaylistError {
    #[error("Invalid playlist ID: {0}")]
    InvalidPlaylistId(#[from] PlaylistIdError),

    #[error("Playlist title must not be empty")]
    EmptyTitle,

    #[error("Playlist not found: {0}")]
    NotFound(String),

    #[error("Only the playlist owner may modify it")]
    NotOwner,

    #[error("This playlist is not accessible")]
    AccessDenied,

    #[error("Referenced song not found: {0}")]
    SongNotFound(String),

    #[error("Referenced user not found: {0}")]
    UserNotFound(String),

    #[error("Song is already in the playlist")]
    AlreadyInPlaylist,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
