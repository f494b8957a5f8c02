use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::album::errors::AlbumIdError;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;

/// Album unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlbumId(pub Uuid);

impl AlbumId {
    /// Generate a new random album ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an album ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AlbumIdError> {
        Uuid::parse_str(s)
            .map(AlbumId)
            .map_err(|e| AlbumIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AlbumId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Album aggregate entity.
#[derive(Debug, Clone)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub release_date: NaiveDate,
    pub artist_id: ArtistId,
    pub image_url: String,
    pub slug: String,
}

/// Album together with its artist, as returned by read operations.
#[derive(Debug, Clone)]
pub struct AlbumDetails {
    pub album: Album,
    pub artist: Artist,
}

/// Command to create a new album.
///
/// `slug` is optional; the service derives it from the title when absent.
#[derive(Debug)]
pub struct CreateAlbumCommand {
    pub title: String,
    pub release_date: NaiveDate,
    pub artist_id: ArtistId,
    pub image_url: String,
    pub slug: Option<String>,
}

/// Command to update an existing album; only provided fields change.
#[derive(Debug)]
pub struct UpdateAlbumCommand {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub artist_id: Option<ArtistId>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
}
