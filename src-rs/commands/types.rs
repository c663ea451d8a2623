use crate::error::MapError;
use crate::session::MapSession;

/// Zero-argument command; returns the lines to print on success.
pub type CommandHandler = Box<dyn Fn(&mut MapSession) -> Result<Vec<String>, MapError>>;

pub struct CommandEntry {
    pub name: String,
    pub description: String,
    pub handler: CommandHandler,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
}
