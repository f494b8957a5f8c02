use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongHighlightDetailsData;
use crate::inbound::http::router::AppState;

pub async fn get_song_highlight(
    State(state): State<AppState>,
    Path(highlight_id): Path<String>,
) -> Result<ApiSuccess<SongHighlightDetailsData>, ApiError> {
    let highlight_id =
        HighlightId::from_string(&highlight_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .highlight_service
        .get_song_highlight(&highlight_id)
        .await
        .map_err(ApiError::from)
        .map(|ref details| ApiSuccess::new(StatusCode::OK, details.into()))
}
