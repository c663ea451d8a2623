use std::collections::HashMap;

use tracing::debug;

use super::types::{CommandEntry, CommandHandler, CommandSummary};
use crate::error::MapError;
use crate::session::MapSession;

/// Exact-match table from REPL tokens to commands.
pub struct CommandRegistry {
    commands: HashMap<String, CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// `map` and `mapb`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(
            "map",
            "display the next 20 locations",
            Box::new(|session: &mut MapSession| session.advance()),
        );
        registry.insert(
            "mapb",
            "display the previous 20 locations, errors when you are on the first page",
            Box::new(|session: &mut MapSession| session.retreat()),
        );
        registry
    }

    pub fn register(&mut self, name: &str, description: &str, handler: CommandHandler) -> Result<(), MapError> {
        if name.is_empty() {
            return Err(MapError::Registration("empty command name".to_string()));
        }
        if self.commands.contains_key(name) {
            return Err(MapError::Registration(format!("{} already registered", name)));
        }
        self.insert(name, description, handler);
        Ok(())
    }

    fn insert(&mut self, name: &str, description: &str, handler: CommandHandler) {
        self.commands.insert(
            name.to_string(),
            CommandEntry {
                name: name.to_string(),
                description: description.to_string(),
                handler,
            },
        );
    }

    pub fn execute(&self, name: &str, session: &mut MapSession) -> Result<Vec<String>, MapError> {
        let entry = self
            .commands
            .get(name)
            .ok_or_else(|| MapError::CommandNotFound(name.to_string()))?;
        debug!(command = %entry.name, "dispatching");
        (entry.handler)(session)
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Registered commands sorted by name.
    pub fn summaries(&self) -> Vec<CommandSummary> {
        let mut items: Vec<CommandSummary> = self
            .commands
            .values()
            .map(|entry| CommandSummary {
                name: entry.name.clone(),
                description: entry.description.clone(),
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::PaginationCursor;
    use crate::source::PageSource;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    const ROOT: &str = "http://locations.test/api/v2/location/";

    /// Serves one fixed page and counts requests.
    struct OnePage {
        hits: Rc<Cell<usize>>,
    }

    impl PageSource for OnePage {
        fn fetch(&self, _url: &str) -> Result<String, MapError> {
            self.hits.set(self.hits.get() + 1);
            Ok(r#"{"next":"P2","previous":null,"results":[{"name":"pallet-town"}]}"#.to_string())
        }
    }

    fn session() -> (MapSession, Rc<Cell<usize>>) {
        let hits = Rc::new(Cell::new(0));
        let source = OnePage { hits: hits.clone() };
        (MapSession::new(PaginationCursor::new(ROOT), Box::new(source)), hits)
    }

    #[test]
    fn defaults_register_map_and_mapb() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(registry.count(), 2);
        assert!(registry.has("map"));
        assert!(registry.has("mapb"));
        assert!(!registry.has("map "));
        assert!(!registry.has("MAP"));

        let names: Vec<String> = registry.summaries().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["map", "mapb"]);
    }

    #[test]
    fn map_prints_first_page() {
        let registry = CommandRegistry::with_defaults();
        let (mut session, hits) = session();

        let lines = registry.execute("map", &mut session).unwrap();
        assert_eq!(lines, vec!["pallet-town"]);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn mapb_after_first_page_fails() {
        let registry = CommandRegistry::with_defaults();
        let (mut session, hits) = session();
        registry.execute("map", &mut session).unwrap();

        let err = registry.execute("mapb", &mut session).unwrap_err();
        assert_eq!(err.to_string(), "no more prev pages");
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unknown_token_touches_nothing() {
        let registry = CommandRegistry::with_defaults();
        let (mut session, hits) = session();

        let err = registry.execute("xyz", &mut session).unwrap_err();
        assert!(matches!(err, MapError::CommandNotFound(ref token) if token == "xyz"));
        assert_eq!(err.to_string(), "command: xyz not found");
        assert_eq!(hits.get(), 0);
        assert!(!session.cursor().is_started());
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        let mut registry = CommandRegistry::with_defaults();
        let noop = || -> CommandHandler { Box::new(|_: &mut MapSession| Ok(Vec::new())) };

        assert!(matches!(
            registry.register("", "nothing", noop()),
            Err(MapError::Registration(_))
        ));
        assert!(matches!(
            registry.register("map", "again", noop()),
            Err(MapError::Registration(_))
        ));
        assert!(registry.register("noop", "does nothing", noop()).is_ok());
        assert_eq!(registry.count(), 3);
    }
}
