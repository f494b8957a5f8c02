use async_trait::async_trait;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistDetails;
use crate::domain::playlist::models::PlaylistEntry;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::UpdatePlaylistCommand;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

/// Port for playlist domain service operations.
///
/// Mutating operations take the acting user and enforce ownership; reads
/// enforce the public/private visibility rule.
#[async_trait]
pub trait PlaylistServicePort: Send + Sync + 'static {
    /// Create a new playlist for the owner named in the command.
    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError>;

    /// Add a song to a playlist owned by `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `NotOwner` - Actor does not own the playlist
    /// * `SongNotFound` - Song does not exist
    /// * `AlreadyInPlaylist` - Song is already a member
    async fn add_song(
        &self,
        actor: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<PlaylistEntry, PlaylistError>;

    /// Retrieve a playlist with its songs.
    ///
    /// Public playlists are returned to anyone. A private playlist is
    /// returned only when `actor` is its owner.
    ///
    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `AccessDenied` - Playlist is private and actor is not the owner
    async fn get_playlist(
        &self,
        id: &PlaylistId,
        actor: Option<&UserId>,
    ) -> Result<PlaylistDetails, PlaylistError>;

    /// Retrieve all playlists owned by `actor`, with songs.
    async fn list_for_owner(&self, actor: &UserId) -> Result<Vec<PlaylistDetails>, PlaylistError>;

    /// Update a playlist owned by `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `NotOwner` - Actor does not own the playlist
    async fn update_playlist(
        &self,
        actor: &UserId,
        id: &PlaylistId,
        command: UpdatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError>;

    /// Delete a playlist owned by `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Playlist does not exist
    /// * `NotOwner` - Actor does not own the playlist
    async fn delete_playlist(
        &self,
        actor: &UserId,
        id: &PlaylistId,
    ) -> Result<(), PlaylistError>;
}

/// Persistence operations for the playlist aggregate.
#[async_trait]
pub trait PlaylistRepository: Send + Sync + 'static {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;

    async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError>;

    async fn find_details_by_id(
        &self,
        id: &PlaylistId,
    ) -> Result<Option<PlaylistDetails>, PlaylistError>;

    async fn list_for_owner(
        &self,
        owner: &UserId,
    ) -> Result<Vec<PlaylistDetails>, PlaylistError>;

    /// Insert a playlist/song membership row.
    ///
    /// # Errors
    /// * `SongNotFound` - Song does not exist
    /// * `AlreadyInPlaylist` - Membership row already exists
    async fn add_song(&self, entry: PlaylistEntry) -> Result<PlaylistEntry, PlaylistError>;

    async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;

    async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError>;
}
