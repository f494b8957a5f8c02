use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::artist::errors::ArtistError;
use crate::domain::artist::models::Artist;
use crate::domain::artist::models::ArtistId;
use crate::domain::artist::models::CreateArtistCommand;
use crate::domain::artist::models::UpdateArtistCommand;
use crate::domain::artist::ports::ArtistRepository;
use crate::domain::artist::ports::ArtistServicePort;

/// Placeholder bio used when an artist is created without one.
const DEFAULT_BIO: &str = "No description";

/// Concrete implementation of ArtistServicePort.
pub struct ArtistService<AR>
where
    AR: ArtistRepository,
{
    repository: Arc<AR>,
}

impl<AR> ArtistService<AR>
where
    AR: ArtistRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> ArtistServicePort for ArtistService<AR>
where
    AR: ArtistRepository,
{
    async fn create_artist(&self, command: CreateArtistCommand) -> Result<Artist, ArtistError> {
        if command.name.is_empty() {
            return Err(ArtistError::EmptyName);
        }

        let slug = command
            .slug
            .unwrap_or_else(|| slug::slugify(&command.name));

        let artist = Artist {
            id: ArtistId::new(),
            name: command.name,
            bio: command.bio.unwrap_or_else(|| DEFAULT_BIO.to_string()),
            slug,
            image_url: command.image_url,
        };

        self.repository.create(artist).await
    }

    async fn list_artists(&self) -> Result<Vec<Artist>, ArtistError> {
        self.repository.list_all().await
    }

    async fn get_artist(&self, id: &ArtistId) -> Result<Artist, ArtistError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ArtistError::NotFound(id.to_string()))
    }

    async fn update_artist(
        &self,
        id: &ArtistId,
        command: UpdateArtistCommand,
    ) -> Result<Artist, ArtistError> {
        let mut artist = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ArtistError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            if name.is_empty() {
                return Err(ArtistError::EmptyName);
            }
            artist.name = name;
        }
        if let Some(bio) = command.bio {
            artist.bio = bio;
        }
        if let Some(slug) = command.slug {
            artist.slug = slug;
        }
        if let Some(image_url) = command.image_url {
            artist.image_url = image_url;
        }

        self.repository.update(artist).await
    }

    async fn delete_artist(&self, id: &ArtistId) -> Result<(), ArtistError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestArtistRepository {}

        #[async_trait]
        impl ArtistRepository for TestArtistRepository {
            async fn create(&self, artist: Artist) -> Result<Artist, ArtistError>;
            async fn find_by_id(&self, id: &ArtistId) -> Result<Option<Artist>, ArtistError>;
            async fn list_all(&self) -> Result<Vec<Artist>, ArtistError>;
            async fn update(&self, artist: Artist) -> Result<Artist, ArtistError>;
            async fn delete(&self, id: &ArtistId) -> Result<(), ArtistError>;
        }
    }

    #[tokio::test]
    async fn test_create_artist_defaults_bio_and_slug() {
        let mut repository = MockTestArtistRepository::new();

        repository
            .expect_create()
            .withf(|artist| {
                artist.name == "Edith Piaf"
                    && artist.bio == "No description"
                    && artist.slug == "edith-piaf"
            })
            .times(1)
            .returning(|artist| Ok(artist));

        let service = ArtistService::new(Arc::new(repository));

        let command = CreateArtistCommand {
            name: "Edith Piaf".to_string(),
            bio: None,
            slug: None,
            image_url: "https://img.example.com/piaf.jpg".to_string(),
        };

        let artist = service.create_artist(command).await.unwrap();
        assert_eq!(artist.slug, "edith-piaf");
    }

    #[tokio::test]
    async fn test_create_artist_empty_name_rejected() {
        let repository = MockTestArtistRepository::new();
        let service = ArtistService::new(Arc::new(repository));

        let command = CreateArtistCommand {
            name: String::new(),
            bio: None,
            slug: None,
            image_url: "https://img.example.com/x.jpg".to_string(),
        };

        let result = service.create_artist(command).await;
        assert!(matches!(result.unwrap_err(), ArtistError::EmptyName));
    }

    #[tokio::test]
    async fn test_update_artist_partial() {
        let mut repository = MockTestArtistRepository::new();

        let artist_id = ArtistId::new();
        let existing = Artist {
            id: artist_id,
            name: "Old Name".to_string(),
            bio: "Old bio".to_string(),
            slug: "old-name".to_string(),
            image_url: "https://img.example.com/old.jpg".to_string(),
        };

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|artist| artist.name == "New Name" && artist.bio == "Old bio")
            .times(1)
            .returning(|artist| Ok(artist));

        let service = ArtistService::new(Arc::new(repository));

        let command = UpdateArtistCommand {
            name: Some("New Name".to_string()),
            bio: None,
            slug: None,
            image_url: None,
        };

        let artist = service.update_artist(&artist_id, command).await.unwrap();
        assert_eq!(artist.name, "New Name");
        assert_eq!(artist.slug, "old-name");
    }

    #[tokio::test]
    async fn test_get_artist_not_found() {
        let mut repository = MockTestArtistRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ArtistService::new(Arc::new(repository));

        let result = service.get_artist(&ArtistId::new()).await;
        assert!(matches!(result.unwrap_err(), ArtistError::NotFound(_)));
    }
}
