use async_trait::async_trait;

use crate::domain::artist::errors::ArtistError;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;
use crate::domain::artist::models::CreateArtistCommand;
use crate::domain::artist::models::UpdateArtistCommand;

/// Port for artist domain service operations.
#[async_trait]
pub trait ArtistServicePort: Send + Sync + 'static {
    /// Create a new artist, defaulting bio and slug when absent.
    async fn create_artist(&self, command: CreateArtistCommand) -> Result<Artist, ArtistError>;

    /// Retrieve all artists.
    async fn list_artists(&self) -> Result<Vec<Artist>, ArtistError>;

    /// Retrieve an artist by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Artist does not exist
    async fn get_artist(&self, id: &ArtistId) -> Result<Artist, ArtistError>;

    /// Update an artist with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Artist does not exist
    async fn update_artist(
        &self,
        id: &ArtistId,
        command: UpdateArtistCommand,
    ) -> Result<Artist, ArtistError>;

    /// Delete an artist.
    ///
    /// # Errors
    /// * `NotFound` - Artist does not exist
    async fn delete_artist(&self, id: &ArtistId) -> Result<(), ArtistError>;
}

/// Persistence operations for the artist aggregate.
#[async_trait]
pub trait ArtistRepository: Send + Sync + 'static {
    async fn create(&self, artist: Artist) -> Result<Artist, ArtistError>;

    async fn find_by_id(&self, id: &ArtistId) -> Result<Option<Artist>, ArtistError>;

    async fn list_all(&self) -> Result<Vec<Artist>, ArtistError>;

    /// Update an existing artist.
    ///
    /// # Errors
    /// * `NotFound` - No row was updated
    async fn update(&self, artist: Artist) -> Result<Artist, ArtistError>;

    /// Remove an artist.
    ///
    /// # Errors
    /// * `NotFound` - No row was deleted
    async fn delete(&self, id: &ArtistId) -> Result<(), ArtistError>;
}
