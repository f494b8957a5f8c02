use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::submission::models::SubmissionId;
use crate::domain::submission::models::SubmissionStatus;
use crate::domain::submission::ports::SubmissionServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SubmissionData;
use crate::inbound::http::router::AppState;

/// HTTP request body for moving a submission through review (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateSubmissionStatusRequest {
    status: String,
}

pub async fn update_submission_status(
    State(state): State<AppState>,
    Path(submission_id): Path<String>,
    Json(body): Json<UpdateSubmissionStatusRequest>,
) -> Result<ApiSuccess<SubmissionData>, ApiError> {
    let submission_id = SubmissionId::from_string(&submission_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let status = SubmissionStatus::parse(&body.status)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .submission_service
        .update_status(&submission_id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref submission| ApiSuccess::new(StatusCode::OK, submission.into()))
}
