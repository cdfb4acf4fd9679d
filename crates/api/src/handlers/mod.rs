pub mod project;
pub mod search;
pub mod task;
pub mod user;

/// Body returned by every successful delete.
pub const DELETED: &str = "Deleted successfully";
