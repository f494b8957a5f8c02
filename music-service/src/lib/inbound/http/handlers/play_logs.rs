pub mod list_user_play_logs;
pub mod record_play;

pub use list_user_play_logs::list_user_play_logs;
pub use record_play::record_play;
