use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::highlight::ports::HighlightServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaylistHighlightDetailsData;
use crate::inbound::http::router::AppState;

pub async fn list_playlist_highlights(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PlaylistHighlightDetailsData>>, ApiError> {
    state
        .highlight_service
        .list_playlist_highlights()
        .await
        .map_err(ApiError::from)
        .map(|highlights| {
            ApiSuccess::new(StatusCode::OK, highlights.iter().map(Into::into).collect())
        })
}
