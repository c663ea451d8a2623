pub mod config;
pub mod cursor;
pub mod envelope;
pub mod error;
pub mod session;

#[path = "source/lib.rs"]
pub mod source;
#[path = "commands/lib.rs"]
pub mod commands;

pub use commands::{CommandRegistry, CommandSummary};
pub use config::MapConfig;
pub use cursor::PaginationCursor;
pub use envelope::{LocationEntry, PageEnvelope};
pub use error::MapError;
pub use session::MapSession;
pub use source::{HttpPageSource, PageSource};
