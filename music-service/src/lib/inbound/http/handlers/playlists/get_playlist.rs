use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use crate::domain::playlist::models::PlaylistId;
use crate::domain::playlist::ports::PlaylistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistDetailsData;
use crate::inbound::http::middleware::identify;
use crate::inbound::http::router::AppState;

/// Public playlists are readable by anyone; a private playlist only by its
/// owner. The route therefore sits outside the auth middleware and resolves
/// the caller's identity itself, treating any token problem as anonymous.
pub async fn get_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
    headers: HeaderMap,
) -> Result<ApiSuccess<PlaylistDetailsData>, ApiError> {
    let playlist_id =
        PlaylistId::from_string(&playlist_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let actor = identify(&state, &headers).await;

    state
        .playlist_service
        .get_playlist(&playlist_id, actor.as_ref().map(|a| &a.user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
