use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::playlist::ports::PlaylistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistDetailsData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_my_playlists(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<PlaylistDetailsData>>, ApiError> {
    state
        .playlist_service
        .list_for_owner(&actor.user_id)
        .await
        .map_err(ApiError::from)
        .map(|playlists| {
            ApiSuccess::new(StatusCode::OK, playlists.iter().map(Into::into).collect())
        })
}
