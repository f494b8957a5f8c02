pub mod create_artist;
pub mod delete_artist;
pub mod get_artist;
pub mod list_artists;
pub mod update_artist;

pub use create_artist::create_artist;
pub use delete_artist::delete_artist;
pub use get_artist::get_artist;
pub use list_artists::list_artists;
pub use update_artist::update_artist;
