use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::play_log::ports::PlayLogServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlayLogData;
use crate::inbound::http::router::AppState;

pub async fn list_user_play_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<PlayLogData>>, ApiError> {
    let user_id = UserId::from_string(&user_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .play_log_service
        .list_for_user(&user_id)
        .await
        .map_err(ApiError::from)
        .map(|logs| ApiSuccess::new(StatusCode::OK, logs.iter().map(Into::into).collect()))
}
