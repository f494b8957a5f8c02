pub mod create_album;
pub mod delete_album;
pub mod get_album;
pub mod list_albums;
pub mod update_album;

pub use create_album::create_album;
pub use delete_album::delete_album;
pub use get_album::get_album;
pub use list_albums::list_albums;
pub use update_album::update_album;
