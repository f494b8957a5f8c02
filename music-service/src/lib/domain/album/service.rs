use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumDetails;
use crate::domain::album::models::AlbumId;
use crate::domain::album::models::CreateAlbumCommand;
use crate::domain::album::models::UpdateAlbumCommand;
use crate::domain::album::ports::AlbumRepository;
use crate::domain::album::ports::AlbumServicePort;

/// Concrete implementation of AlbumServicePort.
pub struct AlbumService<AR>
where
    AR: AlbumRepository,
{
    repository: Arc<AR>,
}

impl<AR> AlbumService<AR>
where
    AR: AlbumRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AlbumServicePort for AlbumService<AR>
where
    AR: AlbumRepository,
{
    async fn create_album(&self, command: CreateAlbumCommand) -> Result<Album, AlbumError> {
        if command.title.is_empty() {
            return Err(AlbumError::EmptyTitle);
        }

        let slug = command
            .slug
            .unwrap_or_else(|| slug::slugify(&command.title));

        let album = Album {
            id: AlbumId::new(),
            title: command.title,
            release_date: command.release_date,
            artist_id: command.artist_id,
            image_url: command.image_url,
            slug,
        };

        self.repository.create(album).await
    }

    async fn list_albums(&self) -> Result<Vec<AlbumDetails>, AlbumError> {
        self.repository.list_all().await
    }

    async fn get_album(&self, id: &AlbumId) -> Result<AlbumDetails, AlbumError> {
        self.repository
            .find_details_by_id(id)
            .await?
            .ok_or(AlbumError::NotFound(id.to_string()))
    }

    async fn update_album(
        &self,
        id: &AlbumId,
        command: UpdateAlbumCommand,
    ) -> Result<Album, AlbumError> {
        let mut album = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AlbumError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            if title.is_empty() {
                return Err(AlbumError::EmptyTitle);
            }
            album.title = title;
        }
        if let Some(release_date) = command.release_date {
            album.release_date = release_date;
        }
        if let Some(artist_id) = command.artist_id {
            album.artist_id = artist_id;
        }
        if let Some(image_url) = command.image_url {
            album.image_url = image_url;
        }
        if let Some(slug) = command.slug {
            album.slug = slug;
        }

        self.repository.update(album).await
    }

    async fn delete_album(&self, id: &AlbumId) -> Result<(), AlbumError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::artist::models::ArtistId;

    mock! {
        pub TestAlbumRepository {}

        #[async_trait]
        impl AlbumRepository for TestAlbumRepository {
            async fn create(&self, album: Album) -> Result<Album, AlbumError>;
            async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, AlbumError>;
            async fn find_details_by_id(&self, id: &AlbumId) -> Result<Option<AlbumDetails>, AlbumError>;
            async fn list_all(&self) -> Result<Vec<AlbumDetails>, AlbumError>;
            async fn update(&self, album: Album) -> Result<Album, AlbumError>;
            async fn delete(&self, id: &AlbumId) -> Result<(), AlbumError>;
        }
    }

    #[tokio::test]
    async fn test_create_album_derives_slug() {
        let mut repository = MockTestAlbumRepository::new();

        repository
            .expect_create()
            .withf(|album| album.title == "La Vie En Rose" && album.slug == "la-vie-en-rose")
            .times(1)
            .returning(|album| Ok(album));

        let service = AlbumService::new(Arc::new(repository));

        let command = CreateAlbumCommand {
            title: "La Vie En Rose".to_string(),
            release_date: NaiveDate::from_ymd_opt(1947, 1, 1).unwrap(),
            artist_id: ArtistId::new(),
            image_url: "https://img.example.com/rose.jpg".to_string(),
            slug: None,
        };

        let album = service.create_album(command).await.unwrap();
        assert_eq!(album.slug, "la-vie-en-rose");
    }

    #[tokio::test]
    async fn test_create_album_keeps_explicit_slug() {
        let mut repository = MockTestAlbumRepository::new();

        repository
            .expect_create()
            .withf(|album| album.slug == "custom-slug")
            .times(1)
            .returning(|album| Ok(album));

        let service = AlbumService::new(Arc::new(repository));

        let command = CreateAlbumCommand {
            title: "Some Album".to_string(),
            release_date: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            artist_id: ArtistId::new(),
            image_url: "https://img.example.com/a.jpg".to_string(),
            slug: Some("custom-slug".to_string()),
        };

        service.create_album(command).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_album_not_found() {
        let mut repository = MockTestAlbumRepository::new();

        repository
            .expect_find_details_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AlbumService::new(Arc::new(repository));

        let result = service.get_album(&AlbumId::new()).await;
        assert!(matches!(result.unwrap_err(), AlbumError::NotFound(_)));
    }
}
