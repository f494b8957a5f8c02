use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistDetails;
use crate::domain::playlist::models::PlaylistEntry;
use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::UpdatePlaylistCommand;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::song::models::SongId;
use crate::domain::user::models::UserId;

/// Concrete implementation of PlaylistServicePort.
///
/// Ownership checks happen here, against the stored playlist row, never
/// against anything the client claims.
pub struct PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    repository: Arc<PR>,
}

impl<PR> PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    /// Load a playlist and require `actor` to be its owner.
    async fn owned_playlist(
        &self,
        actor: &UserId,
        id: &PlaylistId,
    ) -> Result<Playlist, PlaylistError> {
        let playlist = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(PlaylistError::NotFound(id.to_string()))?;

        if playlist.user_id != *actor {
            return Err(PlaylistError::NotOwner);
        }

        Ok(playlist)
    }
}

#[async_trait]
impl<PR> PlaylistServicePort for PlaylistService<PR>
where
    PR: PlaylistRepository,
{
    async fn create_playlist(
        &self,
        command: CreatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError> {
        if command.title.is_empty() {
            return Err(PlaylistError::EmptyTitle);
        }

        let playlist = Playlist {
            id: PlaylistId::new(),
            user_id: command.user_id,
            title: command.title,
            is_public: command.is_public,
            image_url: command.image_url,
        };

        self.repository.create(playlist).await
    }

    async fn add_song(
        &self,
        actor: &UserId,
        playlist_id: &PlaylistId,
        song_id: &SongId,
    ) -> Result<PlaylistEntry, PlaylistError> {
        self.owned_playlist(actor, playlist_id).await?;

        self.repository
            .add_song(PlaylistEntry {
                playlist_id: *playlist_id,
                song_id: *song_id,
            })
            .await
    }

    async fn get_playlist(
        &self,
        id: &PlaylistId,
        actor: Option<&UserId>,
    ) -> Result<PlaylistDetails, PlaylistError> {
        let details = self
            .repository
            .find_details_by_id(id)
            .await?
            .ok_or(PlaylistError::NotFound(id.to_string()))?;

        if details.playlist.is_public {
            return Ok(details);
        }

        match actor {
            Some(actor) if *actor == details.playlist.user_id => Ok(details),
            _ => Err(PlaylistError::AccessDenied),
        }
    }

    async fn list_for_owner(&self, actor: &UserId) -> Result<Vec<PlaylistDetails>, PlaylistError> {
        self.repository.list_for_owner(actor).await
    }

    async fn update_playlist(
        &self,
        actor: &UserId,
        id: &PlaylistId,
        command: UpdatePlaylistCommand,
    ) -> Result<Playlist, PlaylistError> {
        let mut playlist = self.owned_playlist(actor, id).await?;

        if let Some(title) = command.title {
            if title.is_empty() {
                return Err(PlaylistError::EmptyTitle);
            }
            playlist.title = title;
        }
        if let Some(is_public) = command.is_public {
            playlist.is_public = is_public;
        }
        if let Some(image_url) = command.image_url {
            playlist.image_url = image_url;
        }

        self.repository.update(playlist).await
    }

    async fn delete_playlist(
        &self,
        actor: &UserId,
        id: &PlaylistId,
    ) -> Result<(), PlaylistError> {
        self.owned_playlist(actor, id).await?;
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestPlaylistRepository {}

        #[async_trait]
        impl PlaylistRepository for TestPlaylistRepository {
            async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;
            async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError>;
            async fn find_details_by_id(&self, id: &PlaylistId) -> Result<Option<PlaylistDetails>, PlaylistError>;
            async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<PlaylistDetails>, PlaylistError>;
            async fn add_song(&self, entry: PlaylistEntry) -> Result<PlaylistEntry, PlaylistError>;
            async fn update(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;
            async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError>;
        }
    }

    fn playlist_owned_by(owner: UserId, is_public: bool) -> Playlist {
        Playlist {
            id: PlaylistId::new(),
            user_id: owner,
            title: "Road trip".to_string(),
            is_public,
            image_url: "https://img.example.com/trip.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_song_as_owner() {
        let mut repository = MockTestPlaylistRepository::new();

        let owner = UserId::new();
        let playlist = playlist_owned_by(owner, true);
        let playlist_id = playlist.id;
        let song_id = SongId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(playlist.clone())));

        repository
            .expect_add_song()
            .withf(move |entry| entry.playlist_id == playlist_id && entry.song_id == song_id)
            .times(1)
            .returning(|entry| Ok(entry));

        let service = PlaylistService::new(Arc::new(repository));

        let entry = service
            .add_song(&owner, &playlist_id, &song_id)
            .await
            .unwrap();
        assert_eq!(entry.playlist_id, playlist_id);
    }

    #[tokio::test]
    async fn test_add_song_as_non_owner_denied() {
        let mut repository = MockTestPlaylistRepository::new();

        let owner = UserId::new();
        let intruder = UserId::new();
        let playlist = playlist_owned_by(owner, true);
        let playlist_id = playlist.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(playlist.clone())));
        repository.expect_add_song().times(0);

        let service = PlaylistService::new(Arc::new(repository));

        let result = service
            .add_song(&intruder, &playlist_id, &SongId::new())
            .await;
        assert!(matches!(result.unwrap_err(), PlaylistError::NotOwner));
    }

    #[tokio::test]
    async fn test_add_song_playlist_missing() {
        let mut repository = MockTestPlaylistRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PlaylistService::new(Arc::new(repository));

        let result = service
            .add_song(&UserId::new(), &PlaylistId::new(), &SongId::new())
            .await;
        assert!(matches!(result.unwrap_err(), PlaylistError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_public_playlist_without_actor() {
        let mut repository = MockTestPlaylistRepository::new();

        let playlist = playlist_owned_by(UserId::new(), true);
        let playlist_id = playlist.id;

        repository
            .expect_find_details_by_id()
            .times(1)
            .returning(move |_| {
                Ok(Some(PlaylistDetails {
                    playlist: playlist.clone(),
                    songs: vec![],
                }))
            });

        let service = PlaylistService::new(Arc::new(repository));

        let details = service.get_playlist(&playlist_id, None).await.unwrap();
        assert!(details.playlist.is_public);
    }

    #[tokio::test]
    async fn test_get_private_playlist_requires_owner() {
        let mut repository = MockTestPlaylistRepository::new();

        let owner = UserId::new();
        let playlist = playlist_owned_by(owner, false);
        let playlist_id = playlist.id;

        repository
            .expect_find_details_by_id()
            .times(3)
            .returning(move |_| {
                Ok(Some(PlaylistDetails {
                    playlist: playlist.clone(),
                    songs: vec![],
                }))
            });

        let service = PlaylistService::new(Arc::new(repository));

        // Anonymous caller is denied
        let result = service.get_playlist(&playlist_id, None).await;
        assert!(matches!(result.unwrap_err(), PlaylistError::AccessDenied));

        // Another user is denied
        let other = UserId::new();
        let result = service.get_playlist(&playlist_id, Some(&other)).await;
        assert!(matches!(result.unwrap_err(), PlaylistError::AccessDenied));

        // The owner gets the playlist
        let details = service.get_playlist(&playlist_id, Some(&owner)).await;
        assert!(details.is_ok());
    }

    #[tokio::test]
    async fn test_update_playlist_as_owner() {
        let mut repository = MockTestPlaylistRepository::new();

        let owner = UserId::new();
        let playlist = playlist_owned_by(owner, false);
        let playlist_id = playlist.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(playlist.clone())));

        repository
            .expect_update()
            .withf(|playlist| playlist.title == "Renamed" && playlist.is_public)
            .times(1)
            .returning(|playlist| Ok(playlist));

        let service = PlaylistService::new(Arc::new(repository));

        let command = UpdatePlaylistCommand {
            title: Some("Renamed".to_string()),
            is_public: Some(true),
            image_url: None,
        };

        let updated = service
            .update_playlist(&owner, &playlist_id, command)
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_playlist_as_non_owner_denied() {
        let mut repository = MockTestPlaylistRepository::new();

        let owner = UserId::new();
        let playlist = playlist_owned_by(owner, true);
        let playlist_id = playlist.id;

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(playlist.clone())));
        repository.expect_delete().times(0);

        let service = PlaylistService::new(Arc::new(repository));

        let result = service.delete_playlist(&UserId::new(), &playlist_id).await;
        assert!(matches!(result.unwrap_err(), PlaylistError::NotOwner));
    }
}
