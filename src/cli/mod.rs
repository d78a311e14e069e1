pub mod console;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod session;

pub use console::Console;
pub use error::{CliError, Operation};
pub use session::run;
