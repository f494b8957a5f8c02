use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::song::errors::SongError;
use crate::domain::song::models::CreateSongCommand;
use crate::domain::song::models::Language;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongDetails;
use crate::domain::song::models::SongId;
use crate::domain::song::models::SongSearch;
use crate::domain::song::ports::SongRepository;
use crate::domain::song::ports::SongServicePort;

/// Concrete implementation of SongServicePort.
pub struct SongService<SR>
where
    SR: SongRepository,
{
    repository: Arc<SR>,
}

impl<SR> SongService<SR>
where
    SR: SongRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SongServicePort for SongService<SR>
where
    SR: SongRepository,
{
    async fn create_song(&self, command: CreateSongCommand) -> Result<Song, SongError> {
        if command.title.is_empty() {
            return Err(SongError::EmptyTitle);
        }
        if command.duration_secs <= 0 {
            return Err(SongError::InvalidDuration(command.duration_secs));
        }

        let song = Song {
            id: SongId::new(),
            title: command.title,
            slug: command.slug,
            album_id: command.album_id,
            artist_id: command.artist_id,
            file_url: command.file_url,
            language: command.language,
            lyrics: command.lyrics,
            chords: command.chords,
            duration_secs: command.duration_secs,
        };

        self.repository.create(song).await
    }

    async fn list_songs(&self) -> Result<Vec<SongDetails>, SongError> {
        self.repository.list_all().await
    }

    async fn list_songs_by_language(
        &self,
        language: Language,
    ) -> Result<Vec<SongDetails>, SongError> {
        self.repository.list_by_language(language).await
    }

    async fn search_songs(&self, search: SongSearch) -> Result<Vec<Song>, SongError> {
        let songs = self.repository.search(&search).await?;

        // An empty result is a failure, not an empty page.
        if songs.is_empty() {
            return Err(SongError::NoMatches);
        }

        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::album::models::AlbumId;
    use crate::domain::artist::models::ArtistId;

    mock! {
        pub TestSongRepository {}

        #[async_trait]
        impl SongRepository for TestSongRepository {
            async fn create(&self, song: Song) -> Result<Song, SongError>;
            async fn list_all(&self) -> Result<Vec<SongDetails>, SongError>;
            async fn list_by_language(&self, language: Language) -> Result<Vec<SongDetails>, SongError>;
            async fn search(&self, search: &SongSearch) -> Result<Vec<Song>, SongError>;
        }
    }

    fn sample_command() -> CreateSongCommand {
        CreateSongCommand {
            title: "Non, je ne regrette rien".to_string(),
            slug: "non-je-ne-regrette-rien".to_string(),
            album_id: AlbumId::new(),
            artist_id: ArtistId::new(),
            file_url: "https://cdn.example.com/songs/rien.mp3".to_string(),
            language: Language::FrFr,
            lyrics: Some("Non, rien de rien...".to_string()),
            chords: None,
            duration_secs: 140,
        }
    }

    fn sample_song() -> Song {
        Song {
            id: SongId::new(),
            title: "Non, je ne regrette rien".to_string(),
            slug: "non-je-ne-regrette-rien".to_string(),
            album_id: AlbumId::new(),
            artist_id: ArtistId::new(),
            file_url: "https://cdn.example.com/songs/rien.mp3".to_string(),
            language: Language::FrFr,
            lyrics: None,
            chords: None,
            duration_secs: 140,
        }
    }

    #[tokio::test]
    async fn test_create_song_success() {
        let mut repository = MockTestSongRepository::new();

        repository
            .expect_create()
            .withf(|song| song.language == Language::FrFr && song.duration_secs == 140)
            .times(1)
            .returning(|song| Ok(song));

        let service = SongService::new(Arc::new(repository));

        let song = service.create_song(sample_command()).await.unwrap();
        assert_eq!(song.title, "Non, je ne regrette rien");
    }

    #[tokio::test]
    async fn test_create_song_rejects_non_positive_duration() {
        let repository = MockTestSongRepository::new();
        let service = SongService::new(Arc::new(repository));

        let mut command = sample_command();
        command.duration_secs = 0;

        let result = service.create_song(command).await;
        assert!(matches!(result.unwrap_err(), SongError::InvalidDuration(0)));
    }

    #[tokio::test]
    async fn test_search_songs_success() {
        let mut repository = MockTestSongRepository::new();

        repository
            .expect_search()
            .withf(|search| search.query == "regrette" && search.language == Some(Language::FrFr))
            .times(1)
            .returning(|_| Ok(vec![sample_song()]));

        let service = SongService::new(Arc::new(repository));

        let songs = service
            .search_songs(SongSearch {
                query: "regrette".to_string(),
                language: Some(Language::FrFr),
            })
            .await
            .unwrap();
        assert_eq!(songs.len(), 1);
    }

    #[tokio::test]
    async fn test_search_songs_empty_result_is_no_matches() {
        let mut repository = MockTestSongRepository::new();

        repository.expect_search().times(1).returning(|_| Ok(vec![]));

        let service = SongService::new(Arc::new(repository));

        let result = service
            .search_songs(SongSearch {
                query: "zzzzz".to_string(),
                language: None,
            })
            .await;
        assert!(matches!(result.unwrap_err(), SongError::NoMatches));
    }
}
