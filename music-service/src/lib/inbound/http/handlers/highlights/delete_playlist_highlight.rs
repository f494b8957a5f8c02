use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::highlight::models::HighlightId;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_playlist_highlight(
    State(state): State<AppState>,
    Path(highlight_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let highlight_id =
        HighlightId::from_string(&highlight_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .highlight_service
        .delete_playlist_highlight(&highlight_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
