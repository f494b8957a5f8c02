pub mod add_song_to_playlist;
pub mod create_playlist;
pub mod delete_playlist;
pub mod get_playlist;
pub mod list_my_playlists;
pub mod update_playlist;

pub use add_song_to_playlist::add_song_to_playlist;
pub use create_playlist::create_playlist;
pub use delete_playlist::delete_playlist;
pub use get_playlist::get_playlist;
pub use list_my_playlists::list_my_playlists;
pub use update_playlist::update_playlist;
