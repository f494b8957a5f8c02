use async_trait::async_trait;

use crate::domain::submission::errors::SubmissionError;
use crate::domain::submission::models::CreateSubmissionCommand;
use crate::domain::submission::models::LyricsSubmission;
use crate::domain::submission::models::SubmissionDetails;
use crate::domain::submission::models::SubmissionId;
use crate::domain::submission::models::SubmissionStatus;

/// Port for lyrics submission service operations.
#[async_trait]
pub trait SubmissionServicePort: Send + Sync + 'static {
    /// Create a new submission in the PENDING state.
    ///
    /// # Errors
    /// * `UserNotFound` / `SongNotFound` - Dangling references
    async fn create_submission(
        &self,
        command: CreateSubmissionCommand,
    ) -> Result<LyricsSubmission, SubmissionError>;

    /// Retrieve all submissions with submitter and song.
    async fn list_submissions(&self) -> Result<Vec<SubmissionDetails>, SubmissionError>;

    /// Retrieve one submission with submitter and song.
    ///
    /// # Errors
    /// * `NotFound` - Submission does not exist
    async fn get_submission(&self, id: &SubmissionId)
        -> Result<SubmissionDetails, SubmissionError>;

    /// Move a submission through the review workflow.
    ///
    /// # Errors
    /// * `NotFound` - Submission does not exist
    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<LyricsSubmission, SubmissionError>;

    /// Delete a submission.
    ///
    /// # Errors
    /// * `NotFound` - Submission does not exist
    async fn delete_submission(&self, id: &SubmissionId) -> Result<(), SubmissionError>;
}

/// Persistence operations for the lyrics submission aggregate.
#[async_trait]
pub trait SubmissionRepository: Send + Sync + 'static {
    async fn create(
        &self,
        submission: LyricsSubmission,
    ) -> Result<LyricsSubmission, SubmissionError>;

    async fn list_all(&self) -> Result<Vec<SubmissionDetails>, SubmissionError>;

    async fn find_details_by_id(
        &self,
        id: &SubmissionId,
    ) -> Result<Option<SubmissionDetails>, SubmissionError>;

    async fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<Option<LyricsSubmission>, SubmissionError>;

    async fn delete(&self, id: &SubmissionId) -> Result<(), SubmissionError>;
}
