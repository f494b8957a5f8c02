use std::fmt;

use uuid::Uuid;

use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumId;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;
use crate::domain::song::errors::LanguageError;
use crate::domain::song::errors::SongIdError;

/// Song unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SongId(pub Uuid);

impl SongId {
    /// Generate a new random song ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a song ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, SongIdError> {
        Uuid::parse_str(s)
            .map(SongId)
            .map_err(|e| SongIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for SongId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Catalog language of a song's lyrics.
///
/// The wire/storage form is the locale tag (`pt_BR`, `en_US`, ...), matching
/// what clients send in paths and query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    PtBr,
    EnUs,
    EsEs,
    DeDe,
    FrFr,
    ItIt,
    AfAf,
}

impl Language {
    /// Parse a language from its locale tag.
    ///
    /// # Errors
    /// * `Unknown` - Tag is not in the supported set
    pub fn parse(s: &str) -> Result<Self, LanguageError> {
        match s {
            "pt_BR" => Ok(Language::PtBr),
            "en_US" => Ok(Language::EnUs),
            "es_ES" => Ok(Language::EsEs),
            "de_DE" => Ok(Language::DeDe),
            "fr_FR" => Ok(Language::FrFr),
            "it_IT" => Ok(Language::ItIt),
            "af_AF" => Ok(Language::AfAf),
            other => Err(LanguageError::Unknown(other.to_string())),
        }
    }

    /// Get the locale tag for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::PtBr => "pt_BR",
            Language::EnUs => "en_US",
            Language::EsEs => "es_ES",
            Language::DeDe => "de_DE",
            Language::FrFr => "fr_FR",
            Language::ItIt => "it_IT",
            Language::AfAf => "af_AF",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Song aggregate entity.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub slug: String,
    pub album_id: AlbumId,
    pub artist_id: ArtistId,
    pub file_url: String,
    pub language: Language,
    pub lyrics: Option<String>,
    pub chords: Option<String>,
    pub duration_secs: i32,
}

/// Song together with its album and artist, as returned by catalog reads.
#[derive(Debug, Clone)]
pub struct SongDetails {
    pub song: Song,
    pub album: Album,
    pub artist: Artist,
}

/// Command to create a new song.
#[derive(Debug)]
pub struct CreateSongCommand {
    pub title: String,
    pub slug: String,
    pub album_id: AlbumId,
    pub artist_id: ArtistId,
    pub file_url: String,
    pub language: Language,
    pub lyrics: Option<String>,
    pub chords: Option<String>,
    pub duration_secs: i32,
}

/// Catalog search parameters.
///
/// The query is matched case-insensitively as a title prefix or a lyrics
/// substring; `language` narrows the match when present.
#[derive(Debug, Clone)]
pub struct SongSearch {
    pub query: String,
    pub language: Option<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        for tag in ["pt_BR", "en_US", "es_ES", "de_DE", "fr_FR", "it_IT", "af_AF"] {
            assert_eq!(Language::parse(tag).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn test_language_unknown_tag() {
        assert!(Language::parse("xx_XX").is_err());
        assert!(Language::parse("").is_err());
        // Tags are case sensitive
        assert!(Language::parse("PT_br").is_err());
    }
}
