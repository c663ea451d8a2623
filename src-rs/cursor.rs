use tracing::{debug, info, warn};

use crate::envelope::PageEnvelope;
use crate::error::MapError;
use crate::source::PageSource;

/// Position in the server's linked page sequence.
///
/// `current` is either `None` (nothing fetched yet) or the last page that was
/// fetched and decoded successfully. Failed requests leave it untouched, and
/// every target URL comes from links the server already returned.
#[derive(Clone, Debug)]
pub struct PaginationCursor {
    first_page_url: String,
    current: Option<PageEnvelope>,
}

impl PaginationCursor {
    pub fn new(first_page_url: &str) -> Self {
        Self {
            first_page_url: first_page_url.to_string(),
            current: None,
        }
    }

    pub fn first_page_url(&self) -> &str {
        &self.first_page_url
    }

    pub fn current(&self) -> Option<&PageEnvelope> {
        self.current.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// URL `advance` would request.
    pub fn next_target(&self) -> Result<&str, MapError> {
        match &self.current {
            None => Ok(&self.first_page_url),
            Some(page) => page.next.as_deref().ok_or(MapError::EndOfSequence),
        }
    }

    /// URL `retreat` would request.
    pub fn previous_target(&self) -> Result<&str, MapError> {
        self.current
            .as_ref()
            .and_then(|page| page.previous.as_deref())
            .ok_or(MapError::NoPreviousPage)
    }

    pub fn advance<S: PageSource + ?Sized>(&mut self, source: &S) -> Result<&PageEnvelope, MapError> {
        let url = self.next_target()?.to_string();
        self.load(source, url)
    }

    pub fn retreat<S: PageSource + ?Sized>(&mut self, source: &S) -> Result<&PageEnvelope, MapError> {
        let url = self.previous_target()?.to_string();
        self.load(source, url)
    }

    fn load<S: PageSource + ?Sized>(&mut self, source: &S, url: String) -> Result<&PageEnvelope, MapError> {
        debug!(url = %url, "loading page");
        let body = source.fetch(&url)?;
        let page = PageEnvelope::from_json(&body).map_err(|err| {
            warn!(url = %url, error = %err, "page did not decode");
            MapError::Decode { url: url.clone(), source: err }
        })?;
        info!(
            url = %url,
            results = page.results.len(),
            has_next = page.has_next(),
            has_previous = page.has_previous(),
            "page loaded"
        );
        Ok(&*self.current.insert(page))
    }
}
