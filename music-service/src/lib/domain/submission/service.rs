use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::submission::errors::SubmissionError;
use crate::domain::submission::models::CreateSubmissionCommand;
use crate::domain::submission::models::LyricsSubmission;
use crate::domain::submission::models::SubmissionDetails;
use crate::domain::submission::models::SubmissionId;
use crate::domain::submission::models::SubmissionStatus;
use crate::domain::submission::ports::SubmissionRepository;
use crate::domain::submission::ports::SubmissionServicePort;

/// Concrete implementation of SubmissionServicePort.
pub struct SubmissionService<SR>
where
    SR: SubmissionRepository,
{
    repository: Arc<SR>,
}

impl<SR> SubmissionService<SR>
where
    SR: SubmissionRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SubmissionServicePort for SubmissionService<SR>
where
    SR: SubmissionRepository,
{
    async fn create_submission(
        &self,
        command: CreateSubmissionCommand,
    ) -> Result<LyricsSubmission, SubmissionError> {
        if command.submitted_lyrics.is_empty() {
            return Err(SubmissionError::EmptyLyrics);
        }

        let submission = LyricsSubmission {
            id: SubmissionId::new(),
            user_id: command.user_id,
            song_id: command.song_id,
            submitted_lyrics: command.submitted_lyrics,
            status: SubmissionStatus::Pending,
            created_at: Utc::now(),
        };

        self.repository.create(submission).await
    }

    async fn list_submissions(&self) -> Result<Vec<SubmissionDetails>, SubmissionError> {
        self.repository.list_all().await
    }

    async fn get_submission(
        &self,
        id: &SubmissionId,
    ) -> Result<SubmissionDetails, SubmissionError> {
        self.repository
            .find_details_by_id(id)
            .await?
            .ok_or(SubmissionError::NotFound(id.to_string()))
    }

    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<LyricsSubmission, SubmissionError> {
        self.repository
            .update_status(id, status)
            .await?
            .ok_or(SubmissionError::NotFound(id.to_string()))
    }

    async fn delete_submission(&self, id: &SubmissionId) -> Result<(), SubmissionError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::song::models::SongId;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestSubmissionRepository {}

        #[async_trait]
        impl SubmissionRepository for TestSubmissionRepository {
            async fn create(&self, submission: LyricsSubmission) -> Result<LyricsSubmission, SubmissionError>;
            async fn list_all(&self) -> Result<Vec<SubmissionDetails>, SubmissionError>;
            async fn find_details_by_id(&self, id: &SubmissionId) -> Result<Option<SubmissionDetails>, SubmissionError>;
            async fn update_status(&self, id: &SubmissionId, status: SubmissionStatus) -> Result<Option<LyricsSubmission>, SubmissionError>;
            async fn delete(&self, id: &SubmissionId) -> Result<(), SubmissionError>;
        }
    }

    #[tokio::test]
    async fn test_create_submission_starts_pending() {
        let mut repository = MockTestSubmissionRepository::new();

        repository
            .expect_create()
            .withf(|submission| submission.status == SubmissionStatus::Pending)
            .times(1)
            .returning(|submission| Ok(submission));

        let service = SubmissionService::new(Arc::new(repository));

        let command = CreateSubmissionCommand {
            user_id: UserId::new(),
            song_id: SongId::new(),
            submitted_lyrics: "Corrected second verse...".to_string(),
        };

        let submission = service.create_submission(command).await.unwrap();
        assert_eq!(submission.status, SubmissionStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_submission_empty_lyrics_rejected() {
        let repository = MockTestSubmissionRepository::new();
        let service = SubmissionService::new(Arc::new(repository));

        let command = CreateSubmissionCommand {
            user_id: UserId::new(),
            song_id: SongId::new(),
            submitted_lyrics: String::new(),
        };

        let result = service.create_submission(command).await;
        assert!(matches!(result.unwrap_err(), SubmissionError::EmptyLyrics));
    }

    #[tokio::test]
    async fn test_update_status_not_found() {
        let mut repository = MockTestSubmissionRepository::new();

        repository
            .expect_update_status()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = SubmissionService::new(Arc::new(repository));

        let result = service
            .update_status(&SubmissionId::new(), SubmissionStatus::Approved)
            .await;
        assert!(matches!(result.unwrap_err(), SubmissionError::NotFound(_)));
    }
}
