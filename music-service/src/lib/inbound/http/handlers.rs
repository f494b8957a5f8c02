use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::album::errors::AlbumError;
use crate::domain::album::models::Album;
use crate::domain::album::models::AlbumDetails;
use crate::domain::artist::errors::ArtistError;
use crate::domain::artist::models::Artist;
use crate::domain::highlight::errors::HighlightError;
use crate::domain::highlight::models::PlaylistHighlight;
use crate::domain::highlight::models::PlaylistHighlightDetails;
use crate::domain::highlight::models::SongHighlight;
use crate::domain::highlight::models::SongHighlightDetails;
use crate::domain::play_log::errors::PlayLogError;
use crate::domain::play_log::models::PlayLog;
use crate::domain::playlist::errors::PlaylistError;
use crate::domain::playlist::models::Playlist;
use crate::domain::playlist::models::PlaylistDetails;
use crate::domain::song::errors::SongError;
use crate::domain::song::models::Song;
use crate::domain::song::models::SongDetails;
use crate::domain::submission::errors::SubmissionError;
use crate::domain::submission::models::LyricsSubmission;
use crate::domain::submission::models::SubmissionDetails;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod albums;
pub mod artists;
pub mod authenticate;
pub mod highlights;
pub mod play_logs;
pub mod playlists;
pub mod songs;
pub mod submissions;
pub mod users;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByUsername(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::UsernameAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::InvalidUserId(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPlan(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::DatabaseError(_) | UserError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ArtistError> for ApiError {
    fn from(err: ArtistError) -> Self {
        match err {
            ArtistError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ArtistError::InvalidArtistId(_) => ApiError::BadRequest(err.to_string()),
            ArtistError::EmptyName => ApiError::UnprocessableEntity(err.to_string()),
            ArtistError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AlbumError> for ApiError {
    fn from(err: AlbumError) -> Self {
        match err {
            AlbumError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AlbumError::InvalidAlbumId(_) => ApiError::BadRequest(err.to_string()),
            AlbumError::EmptyTitle | AlbumError::ArtistNotFound(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AlbumError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SongError> for ApiError {
    fn from(err: SongError) -> Self {
        match err {
            SongError::NoMatches => ApiError::NotFound(err.to_string()),
            SongError::InvalidSongId(_) => ApiError::BadRequest(err.to_string()),
            SongError::InvalidLanguage(_)
            | SongError::EmptyTitle
            | SongError::InvalidDuration(_)
            | SongError::AlbumNotFound(_)
            | SongError::ArtistNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            SongError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PlaylistError> for ApiError {
    fn from(err: PlaylistError) -> Self {
        match err {
            PlaylistError::NotFound(_) => ApiError::NotFound(err.to_string()),
            // Ownership failures look exactly like a bad token to the caller.
            PlaylistError::NotOwner | PlaylistError::AccessDenied => {
                ApiError::Unauthorized(err.to_string())
            }
            PlaylistError::AlreadyInPlaylist => ApiError::Conflict(err.to_string()),
            PlaylistError::InvalidPlaylistId(_) => ApiError::BadRequest(err.to_string()),
            PlaylistError::EmptyTitle
            | PlaylistError::SongNotFound(_)
            | PlaylistError::UserNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            PlaylistError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SubmissionError::InvalidSubmissionId(_) => ApiError::BadRequest(err.to_string()),
            SubmissionError::InvalidStatus(_)
            | SubmissionError::EmptyLyrics
            | SubmissionError::UserNotFound(_)
            | SubmissionError::SongNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            SubmissionError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<HighlightError> for ApiError {
    fn from(err: HighlightError) -> Self {
        match err {
            HighlightError::NotFound(_) => ApiError::NotFound(err.to_string()),
            HighlightError::InvalidHighlightId(_) => ApiError::BadRequest(err.to_string()),
            HighlightError::NegativePlayCount(_)
            | HighlightError::SongNotFound(_)
            | HighlightError::PlaylistNotFound(_) => ApiError::UnprocessableEntity(err.to_string()),
            HighlightError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<PlayLogError> for ApiError {
    fn from(err: PlayLogError) -> Self {
        match err {
            PlayLogError::InvalidPlayLogId(_) => ApiError::BadRequest(err.to_string()),
            PlayLogError::UserNotFound(_) | PlayLogError::SongNotFound(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            PlayLogError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

// Shared response DTOs. Handlers compose these instead of redefining the
// same projections per operation; the password hash never leaves the domain.

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub plan: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            plan: user.plan.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistData {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub slug: String,
    pub image_url: String,
}

impl From<&Artist> for ArtistData {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.to_string(),
            name: artist.name.clone(),
            bio: artist.bio.clone(),
            slug: artist.slug.clone(),
            image_url: artist.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumData {
    pub id: String,
    pub title: String,
    pub release_date: NaiveDate,
    pub artist_id: String,
    pub image_url: String,
    pub slug: String,
}

impl From<&Album> for AlbumData {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id.to_string(),
            title: album.title.clone(),
            release_date: album.release_date,
            artist_id: album.artist_id.to_string(),
            image_url: album.image_url.clone(),
            slug: album.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumDetailsData {
    pub id: String,
    pub title: String,
    pub release_date: NaiveDate,
    pub image_url: String,
    pub slug: String,
    pub artist: ArtistData,
}

impl From<&AlbumDetails> for AlbumDetailsData {
    fn from(details: &AlbumDetails) -> Self {
        Self {
            id: details.album.id.to_string(),
            title: details.album.title.clone(),
            release_date: details.album.release_date,
            image_url: details.album.image_url.clone(),
            slug: details.album.slug.clone(),
            artist: (&details.artist).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub album_id: String,
    pub artist_id: String,
    pub file_url: String,
    pub language: String,
    pub lyrics: Option<String>,
    pub chords: Option<String>,
    pub duration_secs: i32,
}

impl From<&Song> for SongData {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.to_string(),
            title: song.title.clone(),
            slug: song.slug.clone(),
            album_id: song.album_id.to_string(),
            artist_id: song.artist_id.to_string(),
            file_url: song.file_url.clone(),
            language: song.language.as_str().to_string(),
            lyrics: song.lyrics.clone(),
            chords: song.chords.clone(),
            duration_secs: song.duration_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongDetailsData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub file_url: String,
    pub language: String,
    pub lyrics: Option<String>,
    pub chords: Option<String>,
    pub duration_secs: i32,
    pub album: AlbumData,
    pub artist: ArtistData,
}

impl From<&SongDetails> for SongDetailsData {
    fn from(details: &SongDetails) -> Self {
        Self {
            id: details.song.id.to_string(),
            title: details.song.title.clone(),
            slug: details.song.slug.clone(),
            file_url: details.song.file_url.clone(),
            language: details.song.language.as_str().to_string(),
            lyrics: details.song.lyrics.clone(),
            chords: details.song.chords.clone(),
            duration_secs: details.song.duration_secs,
            album: (&details.album).into(),
            artist: (&details.artist).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub is_public: bool,
    pub image_url: String,
}

impl From<&Playlist> for PlaylistData {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id.to_string(),
            user_id: playlist.user_id.to_string(),
            title: playlist.title.clone(),
            is_public: playlist.is_public,
            image_url: playlist.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistDetailsData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub is_public: bool,
    pub image_url: String,
    pub songs: Vec<SongDetailsData>,
}

impl From<&PlaylistDetails> for PlaylistDetailsData {
    fn from(details: &PlaylistDetails) -> Self {
        Self {
            id: details.playlist.id.to_string(),
            user_id: details.playlist.user_id.to_string(),
            title: details.playlist.title.clone(),
            is_public: details.playlist.is_public,
            image_url: details.playlist.image_url.clone(),
            songs: details.songs.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionData {
    pub id: String,
    pub user_id: String,
    pub song_id: String,
    pub submitted_lyrics: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&LyricsSubmission> for SubmissionData {
    fn from(submission: &LyricsSubmission) -> Self {
        Self {
            id: submission.id.to_string(),
            user_id: submission.user_id.to_string(),
            song_id: submission.song_id.to_string(),
            submitted_lyrics: submission.submitted_lyrics.clone(),
            status: submission.status.as_str().to_string(),
            created_at: submission.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionDetailsData {
    pub id: String,
    pub submitted_lyrics: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user: UserData,
    pub song: SongData,
}

impl From<&SubmissionDetails> for SubmissionDetailsData {
    fn from(details: &SubmissionDetails) -> Self {
        Self {
            id: details.submission.id.to_string(),
            submitted_lyrics: details.submission.submitted_lyrics.clone(),
            status: details.submission.status.as_str().to_string(),
            created_at: details.submission.created_at,
            user: (&details.user).into(),
            song: (&details.song).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongHighlightData {
    pub id: String,
    pub month_year: NaiveDate,
    pub song_id: String,
    pub play_count: i32,
}

impl From<&SongHighlight> for SongHighlightData {
    fn from(highlight: &SongHighlight) -> Self {
        Self {
            id: highlight.id.to_string(),
            month_year: highlight.month_year,
            song_id: highlight.song_id.to_string(),
            play_count: highlight.play_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongHighlightDetailsData {
    pub id: String,
    pub month_year: NaiveDate,
    pub play_count: i32,
    pub song: SongData,
}

impl From<&SongHighlightDetails> for SongHighlightDetailsData {
    fn from(details: &SongHighlightDetails) -> Self {
        Self {
            id: details.highlight.id.to_string(),
            month_year: details.highlight.month_year,
            play_count: details.highlight.play_count,
            song: (&details.song).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistHighlightData {
    pub id: String,
    pub month_year: NaiveDate,
    pub playlist_id: String,
    pub play_count: i32,
}

impl From<&PlaylistHighlight> for PlaylistHighlightData {
    fn from(highlight: &PlaylistHighlight) -> Self {
        Self {
            id: highlight.id.to_string(),
            month_year: highlight.month_year,
            playlist_id: highlight.playlist_id.to_string(),
            play_count: highlight.play_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistHighlightDetailsData {
    pub id: String,
    pub month_year: NaiveDate,
    pub play_count: i32,
    pub playlist: PlaylistData,
}

impl From<&PlaylistHighlightDetails> for PlaylistHighlightDetailsData {
    fn from(details: &PlaylistHighlightDetails) -> Self {
        Self {
            id: details.highlight.id.to_string(),
            month_year: details.highlight.month_year,
            play_count: details.highlight.play_count,
            playlist: (&details.playlist).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayLogData {
    pub id: String,
    pub user_id: String,
    pub song_id: String,
    pub duration_played_secs: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&PlayLog> for PlayLogData {
    fn from(log: &PlayLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            song_id: log.song_id.to_string(),
            duration_played_secs: log.duration_played_secs,
            created_at: log.created_at,
        }
    }
}
