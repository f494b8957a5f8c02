use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongHighlightData;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a song highlight's play count (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePlayCountRequest {
    play_count: i32,
}

pub async fn update_song_highlight(
    State(state): State<AppState>,
    Path(highlight_id): Path<String>,
    Json(body): Json<UpdatePlayCountRequest>,
) -> Result<ApiSuccess<SongHighlightData>, ApiError> {
    let highlight_id =
        HighlightId::from_string(&highlight_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .highlight_service
        .update_song_play_count(&highlight_id, body.play_count)
        .await
        .map_err(ApiError::from)
        .map(|ref highlight| ApiSuccess::new(StatusCode::OK, highlight.into()))
}
