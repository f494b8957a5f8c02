use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::album::ports::AlbumServicePort;
use crate::inbound::http::handlers::AlbumDetailsData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_albums(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AlbumDetailsData>>, ApiError> {
    state
        .album_service
        .list_albums()
        .await
        .map_err(ApiError::from)
        .map(|albums| ApiSuccess::new(StatusCode::OK, albums.iter().map(Into::into).collect()))
}
