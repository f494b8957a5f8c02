use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::submission::models::SubmissionId;
use crate::domain::submission::ports::SubmissionServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let submission_id = SubmissionId::from_string(&submission_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .submission_service
        .delete_submission(&submission_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
