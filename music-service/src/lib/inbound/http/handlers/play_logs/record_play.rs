use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::play_log::models::RecordPlayCommand;
use crate::domain::play_log::ports::PlayLogServicePort;
use crate::domain::song::errors::SongIdError;
use crate::domain::song::models::SongId;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlayLogData;
use crate::inbound::http::router::AppState;

pub async fn record_play(
    State(state): State<AppState>,
    Json(body): Json<RecordPlayRequest>,
) -> Result<ApiSuccess<PlayLogData>, ApiError> {
    state
        .play_log_service
        .record_play(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref log| ApiSuccess::new(StatusCode::CREATED, log.into()))
}

/// HTTP request body for recording a listening event (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordPlayRequest {
    user_id: String,
    song_id: String,
    duration_played_secs: i32,
}

#[derive(Debug, Clone, Error)]
enum ParseRecordPlayRequestError {
    #[error("Invalid user ID: {0}")]
    UserId(#[from] UserIdError),

    #[error("Invalid song ID: {0}")]
    SongId(#[from] SongIdError),
}

impl RecordPlayRequest {
    fn try_into_command(self) -> Result<RecordPlayCommand, ParseRecordPlayRequestError> {
        let user_id = UserId::from_string(&self.user_id)?;
        let song_id = SongId::from_string(&self.song_id)?;

        Ok(RecordPlayCommand {
            user_id,
            song_id,
            duration_played_secs: self.duration_played_secs,
        })
    }
}

impl From<ParseRecordPlayRequestError> for ApiError {
    fn from(err: ParseRecordPlayRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
