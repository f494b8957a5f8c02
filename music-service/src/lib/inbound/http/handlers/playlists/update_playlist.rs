use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::models::UpdatePlaylistCommand;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a playlist (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePlaylistRequest {
    pub title: Option<String>,
    pub is_public: Option<bool>,
    pub image_url: Option<String>,
}

pub async fn update_playlist(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(playlist_id): Path<String>,
    Json(body): Json<UpdatePlaylistRequest>,
) -> Result<ApiSuccess<PlaylistData>, ApiError> {
    let playlist_id =
        PlaylistId::from_string(&playlist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = UpdatePlaylistCommand {
        title: body.title,
        is_public: body.is_public,
        image_url: body.image_url,
    };

    state
        .playlist_service
        .update_playlist(&actor.user_id, &playlist_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref playlist| ApiSuccess::new(StatusCode::OK, playlist.into()))
}
