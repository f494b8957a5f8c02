use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_playlist(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
    Path(playlist_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let playlist_id =
        PlaylistId::from_string(&playlist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .playlist_service
        .delete_playlist(&actor.user_id, &playlist_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
