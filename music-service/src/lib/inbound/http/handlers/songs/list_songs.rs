use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::song::ports::SongServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongDetailsData;
use crate::inbound::http::router::AppState;

pub async fn list_songs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SongDetailsData>>, ApiError> {
    state
        .song_service
        .list_songs()
        .await
        .map_err(ApiError::from)
        .map(|songs| ApiSuccess::new(StatusCode::OK, songs.iter().map(Into::into).collect()))
}
