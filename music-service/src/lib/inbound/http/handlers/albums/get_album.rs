use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::album::models::AlbumId;
use crate::domain::album::ports::AlbumServicePort;
use crate::inbound::http::handlers::AlbumDetailsData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<ApiSuccess<AlbumDetailsData>, ApiError> {
    let album_id =
        AlbumId::from_string(&album_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .album_service
        .get_album(&album_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
