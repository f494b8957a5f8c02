use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::song::errors::SongIdError;
use crate::domain::song::models::SongId;
use crate::domain::submission::models::CreateSubmissionCommand;
use crate::domain::submission::ports::SubmissionServicePort;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SubmissionData;
use crate::inbound::http::router::AppState;

pub async fn create_submission(
    State(state): State<AppState>,
    Json(body): Json<CreateSubmissionRequest>,
) -> Result<ApiSuccess<SubmissionData>, ApiError> {
    state
        .submission_service
        .create_submission(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref submission| ApiSuccess::new(StatusCode::CREATED, submission.into()))
}

/// HTTP request body for creating a lyrics submission (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSubmissionRequest {
    user_id: String,
    song_id: String,
    submitted_lyrics: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateSubmissionRequestError {
    #[error("Invalid user ID: {0}")]
    UserId(#[from] UserIdError),

    #[error("Invalid song ID: {0}")]
    SongId(#[from] SongIdError),
}

impl CreateSubmissionRequest {
    fn try_into_command(
        self,
    ) -> Result<CreateSubmissionCommand, ParseCreateSubmissionRequestError> {
        let user_id = UserId::from_string(&self.user_id)?;
        let song_id = SongId::from_string(&self.song_id)?;

        Ok(CreateSubmissionCommand {
            user_id,
            song_id,
            submitted_lyrics: self.submitted_lyrics,
        })
    }
}

impl From<ParseCreateSubmissionRequestError> for ApiError {
    fn from(err: ParseCreateSubmissionRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
