pub mod create_playlist_highlight;
pub mod create_song_highlight;
pub mod delete_playlist_highlight;
pub mod delete_song_highlight;
pub mod get_playlist_highlight;
pub mod get_song_highlight;
pub mod list_playlist_highlights;
pub mod list_song_highlights;
pub mod update_playlist_highlight;
pub mod update_song_highlight;

pub use create_playlist_highlight::create_playlist_highlight;
pub use create_song_highlight::create_song_highlight;
pub use delete_playlist_highlight::delete_playlist_highlight;
pub use delete_song_highlight::delete_song_highlight;
pub use get_playlist_highlight::get_playlist_highlight;
pub use get_song_highlight::get_song_highlight;
pub use list_playlist_highlights::list_playlist_highlights;
pub use list_song_highlights::list_song_highlights;
pub use update_playlist_highlight::update_playlist_highlight;
pub use update_song_highlight::update_song_highlight;
