//! Error types for pokemap.
//!
//! Every fallible library call returns `Result<T, MapError>`. The REPL prints
//! these and keeps going; none of them are fatal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("{0}")]
    InputRead(#[from] std::io::Error),

    #[error("command: {0} not found")]
    CommandNotFound(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("could not decode page from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no more next pages")]
    EndOfSequence,

    #[error("no more prev pages")]
    NoPreviousPage,

    #[error("invalid command registration: {0}")]
    Registration(String),
}

impl MapError {
    /// True for failures that happened on the wire or while decoding, as
    /// opposed to navigation guards that never reach the network.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            MapError::Fetch { .. } | MapError::HttpStatus { .. } | MapError::Decode { .. }
        )
    }
}
