use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::song::models::Language;
use crate::domain::song::ports::SongServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongDetailsData;
use crate::inbound::http::router::AppState;

pub async fn list_songs_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
) -> Result<ApiSuccess<Vec<SongDetailsData>>, ApiError> {
    let language =
        Language::parse(&language).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .song_service
        .list_songs_by_language(language)
        .await
        .map_err(ApiError::from)
        .map(|songs| ApiSuccess::new(StatusCode::OK, songs.iter().map(Into::into).collect()))
}
