use async_trait::async_trait;

use crate::domain::highlight::errors::HighlightError;
use crate::domain::highlight::models::CreatePlaylistHighlightCommand;
use crate::domain::highlight::models::CreateSongHighlightCommand;
use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::models::PlaylistHighlight;
use crate::domain::highlight::models::PlaylistHighlightDetails;
use crate::domain::highlight::models::SongHighlight;
use crate::domain::highlight::models::SongHighlightDetails;

/// Port for play-count highlight operations, covering both monthly charts.
#[async_trait]
pub trait HighlightServicePort: Send + Sync + 'static {
    async fn create_song_highlight(
        &self,
        command: CreateSongHighlightCommand,
    ) -> Result<SongHighlight, HighlightError>;

    async fn list_song_highlights(&self) -> Result<Vec<SongHighlightDetails>, HighlightError>;

    async fn get_song_highlight(
        &self,
        id: &HighlightId,
    ) -> Result<SongHighlightDetails, HighlightError>;

    async fn update_song_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<SongHighlight, HighlightError>;

    async fn delete_song_highlight(&self, id: &HighlightId) -> Result<(), HighlightError>;

    async fn create_playlist_highlight(
        &self,
        command: CreatePlaylistHighlightCommand,
    ) -> Result<PlaylistHighlight, HighlightError>;

    async fn list_playlist_highlights(
        &self,
    ) -> Result<Vec<PlaylistHighlightDetails>, HighlightError>;

    async fn get_playlist_highlight(
        &self,
        id: &HighlightId,
    ) -> Result<PlaylistHighlightDetails, HighlightError>;

    async fn update_playlist_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<PlaylistHighlight, HighlightError>;

    async fn delete_playlist_highlight(&self, id: &HighlightId) -> Result<(), HighlightError>;
}

/// Persistence operations for the monthly song chart.
#[async_trait]
pub trait SongHighlightRepository: Send + Sync + 'static {
    async fn create(&self, highlight: SongHighlight) -> Result<SongHighlight, HighlightError>;

    async fn list_all(&self) -> Result<Vec<SongHighlightDetails>, HighlightError>;

    async fn find_details_by_id(
        &self,
        id: &HighlightId,
    ) -> Result<Option<SongHighlightDetails>, HighlightError>;

    async fn update_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<Option<SongHighlight>, HighlightError>;

    async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError>;
}

/// Persistence operations for the monthly playlist chart.
#[async_trait]
pub trait PlaylistHighlightRepository: Send + Sync + 'static {
    async fn create(
        &self,
        highlight: PlaylistHighlight,
    ) -> Result<PlaylistHighlight, HighlightError>;

    async fn list_all(&self) -> Result<Vec<PlaylistHighlightDetails>, HighlightError>;

    async fn find_details_by_id(
        &self,
        id: &HighlightId,
    ) -> Result<Option<PlaylistHighlightDetails>, HighlightError>;

    async fn update_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<Option<PlaylistHighlight>, HighlightError>;

    async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError>;
}
