use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::highlight::errors::HighlightIdError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongId;

/// Highlight unique identifier type (shared by both highlight kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightId(pub Uuid);

impl HighlightId {
    /// Generate a new random highlight ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a highlight ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, HighlightIdError> {
        Uuid::parse_str(s)
            .map(HighlightId)
            .map_err(|e| HighlightIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for HighlightId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HighlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Month entry of the most-played songs chart.
#[derive(Debug, Clone)]
pub struct SongHighlight {
    pub id: HighlightId,
    pub month_year: NaiveDate,
    pub song_id: SongId,
    pub play_count: i32,
}

/// Month entry of the most-played playlists chart.
#[derive(Debug, Clone)]
pub struct PlaylistHighlight {
    pub id: HighlightId,
    pub month_year: NaiveDate,
    pub playlist_id: PlaylistId,
    pub play_count: i32,
}

/// Song highlight together with its song.
#[derive(Debug, Clone)]
pub struct SongHighlightDetails {
    pub highlight: SongHighlight,
    pub song: Song,
}

/// Playlist highlight together with its playlist.
#[derive(Debug, Clone)]
pub struct PlaylistHighlightDetails {
    pub highlight: PlaylistHighlight,
    pub playlist: Playlist,
}

/// Command to create a song highlight. `play_count` defaults to 0.
#[derive(Debug)]
pub struct CreateSongHighlightCommand {
    pub month_year: NaiveDate,
    pub song_id: SongId,
    pub play_count: Option<i32>,
}

/// Command to create a playlist highlight. `play_count` defaults to 0.
#[derive(Debug)]
pub struct CreatePlaylistHighlightCommand {
    pub month_year: NaiveDate,
    pub playlist_id: PlaylistId,
    pub play_count: Option<i32>,
}
