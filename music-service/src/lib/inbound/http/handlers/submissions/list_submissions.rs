use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::submission::ports::SubmissionServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SubmissionDetailsData;
use crate::inbound::http::router::AppState;

pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SubmissionDetailsData>>, ApiError> {
    state
        .submission_service
        .list_submissions()
        .await
        .map_err(ApiError::from)
        .map(|submissions| {
            ApiSuccess::new(StatusCode::OK, submissions.iter().map(Into::into).collect())
        })
}
