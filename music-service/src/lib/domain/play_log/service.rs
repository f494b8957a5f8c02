use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::play_log::errors::PlayLogError;
use crate::domain::play_log::models::PlayLog;
use crate::domain::play_log::models::PlayLogId;
use crate::domain::play_log::models::RecordPlayCommand;
use crate::domain::play_log::ports::PlayLogRepository;
use crate::domain::play_log::ports::PlayLogServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of PlayLogServicePort.
pub struct PlayLogService<PR>
where
    PR: PlayLogRepository,
{
    repository: Arc<PR>,
}

impl<PR> PlayLogService<PR>
where
    PR: PlayLogRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> PlayLogServicePort for PlayLogService<PR>
where
    PR: PlayLogRepository,
{
    async fn record_play(&self, command: RecordPlayCommand) -> Result<PlayLog, PlayLogError> {
        let log = PlayLog {
            id: PlayLogId::new(),
            user_id: command.user_id,
            song_id: command.song_id,
            duration_played_secs: command.duration_played_secs,
            created_at: Utc::now(),
        };

        self.repository.create(log).await
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PlayLog>, PlayLogError> {
        self.repository.list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::song::models::SongId;

    mock! {
        pub TestPlayLogRepository {}

        #[async_trait]
        impl PlayLogRepository for TestPlayLogRepository {
            async fn create(&self, log: PlayLog) -> Result<PlayLog, PlayLogError>;
            async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<PlayLog>, PlayLogError>;
        }
    }

    #[tokio::test]
    async fn test_record_play() {
        let mut repository = MockTestPlayLogRepository::new();

        let user_id = UserId::new();
        let song_id = SongId::new();

        repository
            .expect_create()
            .withf(move |log| {
                log.user_id == user_id && log.song_id == song_id && log.duration_played_secs == 95
            })
            .times(1)
            .returning(|log| Ok(log));

        let service = PlayLogService::new(Arc::new(repository));

        let log = service
            .record_play(RecordPlayCommand {
                user_id,
                song_id,
                duration_played_secs: 95,
            })
            .await
            .unwrap();
        assert_eq!(log.duration_played_secs, 95);
    }

    #[tokio::test]
    async fn test_list_for_user_empty() {
        let mut repository = MockTestPlayLogRepository::new();

        repository
            .expect_list_for_user()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = PlayLogService::new(Arc::new(repository));

        let logs = service.list_for_user(&UserId::new()).await.unwrap();
        assert!(logs.is_empty());
    }
}
