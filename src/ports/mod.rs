pub mod activity_log;
pub mod catalog;
pub mod directory;

pub use activity_log::ActivityLog;
pub use catalog::Catalog;
pub use directory::Directory;
