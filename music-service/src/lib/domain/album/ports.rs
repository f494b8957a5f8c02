use async_trait::async_trait;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumDetails;
use crate::domain::album::models::AlbumId;
use crate::domain::album::models::CreateAlbumCommand;
use crate::domain::album::models::UpdateAlbumCommand;

/// Port for album domain service operations.
#[async_trait]
pub trait AlbumServicePort: Send + Sync + 'static {
    /// Create a new album, deriving the slug from the title when absent.
    ///
    /// # Errors
    /// * `ArtistNotFound` - Referenced artist does not exist
    async fn create_album(&self, command: CreateAlbumCommand) -> Result<Album, AlbumError>;

    /// Retrieve all albums with their artists.
    async fn list_albums(&self) -> Result<Vec<AlbumDetails>, AlbumError>;

    /// Retrieve an album with its artist.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    async fn get_album(&self, id: &AlbumId) -> Result<AlbumDetails, AlbumError>;

    /// Update an album with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    /// * `ArtistNotFound` - New artist reference does not exist
    async fn update_album(
        &self,
        id: &AlbumId,
        command: UpdateAlbumCommand,
    ) -> Result<Album, AlbumError>;

    /// Delete an album.
    ///
    /// # Errors
    /// * `NotFound` - Album does not exist
    async fn delete_album(&self, id: &AlbumId) -> Result<(), AlbumError>;
}

/// Persistence operations for the album aggregate.
#[async_trait]
pub trait AlbumRepository: Send + Sync + 'static {
    async fn create(&self, album: Album) -> Result<Album, AlbumError>;

    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, AlbumError>;

    async fn find_details_by_id(&self, id: &AlbumId) -> Result<Option<AlbumDetails>, AlbumError>;

    async fn list_all(&self) -> Result<Vec<AlbumDetails>, AlbumError>;

    async fn update(&self, album: Album) -> Result<Album, AlbumError>;

    async fn delete(&self, id: &AlbumId) -> Result<(), AlbumError>;
}
