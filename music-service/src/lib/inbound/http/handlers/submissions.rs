pub mod create_submission;
pub mod delete_submission;
pub mod get_submission;
pub mod list_submissions;
pub mod update_submission_status;

pub use create_submission::create_submission;
pub use delete_submission::delete_submission;
pub use get_submission::get_submission;
pub use list_submissions::list_submissions;
pub use update_submission_status::update_submission_status;
