use crate::config::MapConfig;
use crate::cursor::PaginationCursor;
use crate::error::MapError;
use crate::source::{HttpPageSource, PageSource};

/// The cursor together with the source it pages through. Owned by the REPL.
pub struct MapSession {
    cursor: PaginationCursor,
    source: Box<dyn PageSource>,
}

impl MapSession {
    pub fn new(cursor: PaginationCursor, source: Box<dyn PageSource>) -> Self {
        Self { cursor, source }
    }

    pub fn from_config(cfg: &MapConfig) -> Result<Self, MapError> {
        let source = HttpPageSource::new(cfg)?;
        Ok(Self::new(PaginationCursor::new(&cfg.base_url), Box::new(source)))
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn advance(&mut self) -> Result<Vec<String>, MapError> {
        let page = self.cursor.advance(&self.source)?;
        Ok(page.names().map(str::to_string).collect())
    }

    pub fn retreat(&mut self) -> Result<Vec<String>, MapError> {
        let page = self.cursor.retreat(&self.source)?;
        Ok(page.names().map(str::to_string).collect())
    }
}
