pub mod activity_log;
pub mod catalog;
pub mod directory;

pub use activity_log::ActivityLog as InMemoryActivityLog;
pub use catalog::Catalog as InMemoryCatalog;
pub use directory::Directory as InMemoryDirectory;
