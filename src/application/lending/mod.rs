mod activity;
mod errors;
mod lending_service;
mod registration;

pub use activity::Recorded;
pub use errors::{LendingError, LogUnavailable, MissingRecord, Result};
pub use lending_service::{ServiceDependencies, issue_book, return_book};
pub use registration::{add_book, add_member, list_books};
