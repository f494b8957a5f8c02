use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::highlight::errors::HighlightError;
use crate::domain::highlight::models::CreatePlaylistHighlightCommand;
use crate::domain::highlight::models::CreateSongHighlightCommand;
use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::models::PlaylistHighlight;
use crate::domain::highlight::models::PlaylistHighlightDetails;
use crate::domain::highlight::models::SongHighlight;
use crate::domain::highlight::models::SongHighlightDetails;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::domain::highlight::ports::PlaylistHighlightRepository;
use crate::domain::highlight::ports::SongHighlightRepository;

/// Concrete implementation of HighlightServicePort over both chart stores.
pub struct HighlightService<SR, PR>
where
    SR: SongHighlightRepository,
    PR: PlaylistHighlightRepository,
{
    song_highlights: Arc<SR>,
    playlist_highlights: Arc<PR>,
}

impl<SR, PR> HighlightService<SR, PR>
where
    SR: SongHighlightRepository,
    PR: PlaylistHighlightRepository,
{
    pub fn new(song_highlights: Arc<SR>, playlist_highlights: Arc<PR>) -> Self {
        Self {
            song_highlights,
            playlist_highlights,
        }
    }
}

fn validated_play_count(play_count: i32) -> Result<i32, HighlightError> {
    if play_count < 0 {
        return Err(HighlightError::NegativePlayCount(play_count));
    }
    Ok(play_count)
}

#[async_trait]
impl<SR, PR> HighlightServicePort for HighlightService<SR, PR>
where
    SR: SongHighlightRepository,
    PR: PlaylistHighlightRepository,
{
    async fn create_song_highlight(
        &self,
        command: CreateSongHighlightCommand,
    ) -> Result<SongHighlight, HighlightError> {
        let play_count = validated_play_count(command.play_count.unwrap_or(0))?;

        let highlight = SongHighlight {
            id: HighlightId::new(),
            month_year: command.month_year,
            song_id: command.song_id,
            play_count,
        };

        self.song_highlights.create(highlight).await
    }

    async fn list_song_highlights(&self) -> Result<Vec<SongHighlightDetails>, HighlightError> {
        self.song_highlights.list_all().await
    }

    async fn get_song_highlight(
        &self,
        id: &HighlightId,
    ) -> Result<SongHighlightDetails, HighlightError> {
        self.song_highlights
            .find_details_by_id(id)
            .await?
            .ok_or(HighlightError::NotFound(id.to_string()))
    }

    async fn update_song_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<SongHighlight, HighlightError> {
        let play_count = validated_play_count(play_count)?;

        self.song_highlights
            .update_play_count(id, play_count)
            .await?
            .ok_or(HighlightError::NotFound(id.to_string()))
    }

    async fn delete_song_highlight(&self, id: &HighlightId) -> Result<(), HighlightError> {
        self.song_highlights.delete(id).await
    }

    async fn create_playlist_highlight(
        &self,
        command: CreatePlaylistHighlightCommand,
    ) -> Result<PlaylistHighlight, HighlightError> {
        let play_count = validated_play_count(command.play_count.unwrap_or(0))?;

        let highlight = PlaylistHighlight {
            id: HighlightId::new(),
            month_year: command.month_year,
            playlist_id: command.playlist_id,
            play_count,
        };

        self.playlist_highlights.create(highlight).await
    }

    async fn list_playlist_highlights(
        &self,
    ) -> Result<Vec<PlaylistHighlightDetails>, HighlightError> {
        self.playlist_highlights.list_all().await
    }

    async fn get_playlist_highlight(
        &self,
        id: &HighlightId,
    ) -> Result<PlaylistHighlightDetails, HighlightError> {
        self.playlist_highlights
            .find_details_by_id(id)
            .await?
            .ok_or(HighlightError::NotFound(id.to_string()))
    }

    async fn update_playlist_play_count(
        &self,
        id: &HighlightId,
        play_count: i32,
    ) -> Result<PlaylistHighlight, HighlightError> {
        let play_count = validated_play_count(play_count)?;

        self.playlist_highlights
            .update_play_count(id, play_count)
            .await?
            .ok_or(HighlightError::NotFound(id.to_string()))
    }

    async fn delete_playlist_highlight(&self, id: &HighlightId) -> Result<(), HighlightError> {
        self.playlist_highlights.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::playlist::models::PlaylistId;
    use crate::domain::song::models::SongId;

    mock! {
        pub TestSongHighlightRepository {}

        #[async_trait]
        impl SongHighlightRepository for TestSongHighlightRepository {
            async fn create(&self, highlight: SongHighlight) -> Result<SongHighlight, HighlightError>;
            async fn list_all(&self) -> Result<Vec<SongHighlightDetails>, HighlightError>;
            async fn find_details_by_id(&self, id: &HighlightId) -> Result<Option<SongHighlightDetails>, HighlightError>;
            async fn update_play_count(&self, id: &HighlightId, play_count: i32) -> Result<Option<SongHighlight>, HighlightError>;
            async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError>;
        }
    }

    mock! {
        pub TestPlaylistHighlightRepository {}

        #[async_trait]
        impl PlaylistHighlightRepository for TestPlaylistHighlightRepository {
            async fn create(&self, highlight: PlaylistHighlight) -> Result<PlaylistHighlight, HighlightError>;
            async fn list_all(&self) -> Result<Vec<PlaylistHighlightDetails>, HighlightError>;
            async fn find_details_by_id(&self, id: &HighlightId) -> Result<Option<PlaylistHighlightDetails>, HighlightError>;
            async fn update_play_count(&self, id: &HighlightId, play_count: i32) -> Result<Option<PlaylistHighlight>, HighlightError>;
            async fn delete(&self, id: &HighlightId) -> Result<(), HighlightError>;
        }
    }

    #[tokio::test]
    async fn test_create_song_highlight_defaults_play_count() {
        let mut song_repo = MockTestSongHighlightRepository::new();
        let playlist_repo = MockTestPlaylistHighlightRepository::new();

        song_repo
            .expect_create()
            .withf(|highlight| highlight.play_count == 0)
            .times(1)
            .returning(|highlight| Ok(highlight));

        let service = HighlightService::new(Arc::new(song_repo), Arc::new(playlist_repo));

        let highlight = service
            .create_song_highlight(CreateSongHighlightCommand {
                month_year: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                song_id: SongId::new(),
                play_count: None,
            })
            .await
            .unwrap();
        assert_eq!(highlight.play_count, 0);
    }

    #[tokio::test]
    async fn test_negative_play_count_rejected() {
        let song_repo = MockTestSongHighlightRepository::new();
        let playlist_repo = MockTestPlaylistHighlightRepository::new();

        let service = HighlightService::new(Arc::new(song_repo), Arc::new(playlist_repo));

        let result = service
            .update_song_play_count(&HighlightId::new(), -5)
            .await;
        assert!(matches!(
            result.unwrap_err(),
            HighlightError::NegativePlayCount(-5)
        ));
    }

    #[tokio::test]
    async fn test_update_playlist_play_count() {
        let song_repo = MockTestSongHighlightRepository::new();
        let mut playlist_repo = MockTestPlaylistHighlightRepository::new();

        let highlight_id = HighlightId::new();
        let playlist_id = PlaylistId::new();

        playlist_repo
            .expect_update_play_count()
            .withf(move |id, play_count| *id == highlight_id && *play_count == 42)
            .times(1)
            .returning(move |id, play_count| {
                Ok(Some(PlaylistHighlight {
                    id: *id,
                    month_year: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    playlist_id,
                    play_count,
                }))
            });

        let service = HighlightService::new(Arc::new(song_repo), Arc::new(playlist_repo));

        let highlight = service
            .update_playlist_play_count(&highlight_id, 42)
            .await
            .unwrap();
        assert_eq!(highlight.play_count, 42);
    }

    #[tokio::test]
    async fn test_get_song_highlight_not_found() {
        let mut song_repo = MockTestSongHighlightRepository::new();
        let playlist_repo = MockTestPlaylistHighlightRepository::new();

        song_repo
            .expect_find_details_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = HighlightService::new(Arc::new(song_repo), Arc::new(playlist_repo));

        let result = service.get_song_highlight(&HighlightId::new()).await;
        assert!(matches!(result.unwrap_err(), HighlightError::NotFound(_)));
    }
}
