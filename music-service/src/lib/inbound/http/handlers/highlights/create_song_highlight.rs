use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::highlight::models::CreateSongHighlightCommand;
use crate::domain::highlight::ports::HighlightServicePort;
use crate::domain::song::errors::SongIdError;
use crate::domain::song::models::SongId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::SongHighlightData;
use crate::inbound::http::router::AppState;

pub async fn create_song_highlight(
    State(state): State<AppState>,
    Json(body): Json<CreateSongHighlightRequest>,
) -> Result<ApiSuccess<SongHighlightData>, ApiError> {
    state
        .highlight_service
        .create_song_highlight(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref highlight| ApiSuccess::new(StatusCode::CREATED, highlight.into()))
}

/// HTTP request body for creating a song highlight (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSongHighlightRequest {
    month_year: String,
    song_id: String,
    play_count: Option<i32>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateSongHighlightRequestError {
    #[error("Invalid month_year date (expected YYYY-MM-DD): {0}")]
    MonthYear(String),

    #[error("Invalid song ID: {0}")]
    SongId(#[from] SongIdError),
}

impl CreateSongHighlightRequest {
    fn try_into_command(
        self,
    ) -> Result<CreateSongHighlightCommand, ParseCreateSongHighlightRequestError> {
        let month_year = self
            .month_year
            .parse::<NaiveDate>()
            .map_err(|e| ParseCreateSongHighlightRequestError::MonthYear(e.to_string()))?;
        let song_id = SongId::from_string(&self.song_id)?;

        Ok(CreateSongHighlightCommand {
            month_year,
            song_id,
            play_count: self.play_count,
        })
    }
}

impl From<ParseCreateSongHighlightRequestError> for ApiError {
    fn from(err: ParseCreateSongHighlightRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
