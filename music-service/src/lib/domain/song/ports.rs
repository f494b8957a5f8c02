use async_trait::async_trait;

use crate::domain::song::errors::SongError;
use crate::domain::song::models::CreateSongCommand;
use crate::domain::song::models::Language;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongDetails;
use crate::domain::song::models::SongSearch;

/// Port for song domain service operations.
#[async_trait]
pub trait SongServicePort: Send + Sync + 'static {
    /// Create a new song in the catalog.
    ///
    /// # Errors
    /// * `AlbumNotFound` / `ArtistNotFound` - Dangling references
    /// * `InvalidDuration` - Duration is not positive
    async fn create_song(&self, command: CreateSongCommand) -> Result<Song, SongError>;

    /// Retrieve the whole catalog with albums and artists.
    async fn list_songs(&self) -> Result<Vec<SongDetails>, SongError>;

    /// Retrieve the catalog for one language, with albums and artists.
    async fn list_songs_by_language(
        &self,
        language: Language,
    ) -> Result<Vec<SongDetails>, SongError>;

    /// Search the catalog.
    ///
    /// # Errors
    /// * `NoMatches` - Nothing matched the query
    async fn search_songs(&self, search: SongSearch) -> Result<Vec<Song>, SongError>;
}

/// Persistence operations for the song aggregate.
#[async_trait]
pub trait SongRepository: Send + Sync + 'static {
    async fn create(&self, song: Song) -> Result<Song, SongError>;

    async fn list_all(&self) -> Result<Vec<SongDetails>, SongError>;

    async fn list_by_language(&self, language: Language) -> Result<Vec<SongDetails>, SongError>;

    /// Match songs by title prefix or lyrics substring, case-insensitively,
    /// optionally narrowed to one language. Returns bare songs (no joins).
    async fn search(&self, search: &SongSearch) -> Result<Vec<Song>, SongError>;
}
