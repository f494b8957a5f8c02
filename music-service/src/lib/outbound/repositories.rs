pub mod album;
pub mod artist;
pub mod play_log;
pub mod playlist;
pub mod playlist_highlight;
pub mod song;
pub mod song_highlight;
pub mod submission;
pub mod user;

pub use album::PostgresAlbumRepository;
pub use artist::PostgresArtistRepository;
pub use play_log::PostgresPlayLogRepository;
pub use playlist::PostgresPlaylistRepository;
pub use playlist_highlight::PostgresPlaylistHighlightRepository;
pub use song::PostgresSongRepository;
pub use song_highlight::PostgresSongHighlightRepository;
pub use submission::PostgresSubmissionRepository;
pub use user::PostgresUserRepository;
