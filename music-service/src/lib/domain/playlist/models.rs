use std::fmt;

use uuid::Uuid;

use crate::domain::playlist::errors::PlaylistIdError;
use crate::domain::song::models::SongDetails;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

/// Playlist unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaylistId(pub Uuid);

impl PlaylistId {
    /// Generate a new random playlist ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a playlist ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PlaylistIdError> {
        Uuid::parse_str(s)
            .map(PlaylistId)
            .map_err(|e| PlaylistIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PlaylistId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Playlist aggregate entity.
///
/// `is_public` controls read visibility: public playlists are readable by
/// anyone, private ones only by their owner. Mutations are owner-only either
/// way.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: PlaylistId,
    pub user_id: UserId,
    pub title: String,
    pub is_public: bool,
    pub image_url: String,
}

/// Membership of one song in one playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub playlist_id: PlaylistId,
    pub song_id: SongId,
}

/// Playlist together with its songs (each with album and artist).
#[derive(Debug, Clone)]
pub struct PlaylistDetails {
    pub playlist: Playlist,
    pub songs: Vec<SongDetails>,
}

/// Command to create a new playlist.
///
/// Carries the owner id explicitly: creation is not token-gated, the owner
/// arrives in the request body.
#[derive(Debug)]
pub struct CreatePlaylistCommand {
    pub user_id: UserId,
    pub title: String,
    pub is_public: bool,
    pub image_url: String,
}

/// Command to update an existing playlist; only provided fields change.
#[derive(Debug)]
pub struct UpdatePlaylistCommand {
    pub title: Option<String>,
    pub is_public: Option<bool>,
    pub image_url: Option<String>,
}
