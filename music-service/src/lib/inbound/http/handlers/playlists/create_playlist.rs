use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::playlist::models::CreatePlaylistCommand;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistData;
use crate::inbound::http::router::AppState;

pub async fn create_playlist(
    State(state): State<AppState>,
    Json(body): Json<CreatePlaylistRequest>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    state
        .playlist_service
        .create_playlist(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::CREATED, playlist.into()))
}

/// HTTP request body for creating a playlist (raw JSON).
///
/// The owner arrives in the body; this endpoint is not token-gated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePlaylistRequest {
    user_id: String,
    title: String,
    is_public: bool,
    image_url: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreatePlaylistRequestError {
    #[error("Invalid user ID: {0}")]
    UserId(#[from] UserIdError),
}

impl CreatePlaylistRequest {
    fn try_into_command(self) -> Result<CreatePlaylistCommand, ParseCreatePlaylistRequestError> {
        let user_id = UserId::from_string(&self.user_id)?;

        Ok(CreatePlaylistCommand {
            user_id,
            title: self.title,
            is_public: self.is_public,
            image_url: self.image_url,
        })
    }
}

impl From<ParseCreatePlaylistRequestError> for ApiError {
    fn from(err: ParseCreatePlaylistRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
