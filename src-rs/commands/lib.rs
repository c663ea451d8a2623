pub mod registry;
pub mod types;

pub use registry::CommandRegistry;
pub use types::{CommandEntry, CommandHandler, CommandSummary};
