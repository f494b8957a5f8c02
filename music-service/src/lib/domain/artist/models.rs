use std::fmt;

use uuid::Uuid;

use crate::domain::artist::errors::ArtistIdError;

/// Artist unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArtistId(pub Uuid);

impl ArtistId {
    /// Generate a new random artist ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an artist ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ArtistIdError> {
        Uuid::parse_str(s)
            .map(ArtistId)
            .map_err(|e| ArtistIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ArtistId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Artist aggregate entity.
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub bio: String,
    pub slug: String,
    pub image_url: String,
}

/// Command to create a new artist.
///
/// `bio` and `slug` are optional; the service fills in a placeholder bio and
/// derives the slug from the name when absent.
#[derive(Debug)]
pub struct CreateArtistCommand {
    pub name: String,
    pub bio: Option<String>,
    pub slug: Option<String>,
    pub image_url: String,
}

/// Command to update an existing artist; only provided fields change.
#[derive(Debug)]
pub struct UpdateArtistCommand {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
}
