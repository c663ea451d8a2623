use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, warn};

use super::types::PageSource;
use crate::config::MapConfig;
use crate::error::MapError;

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(cfg: &MapConfig) -> Result<Self, MapError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(MapError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch(&self, url: &str) -> Result<String, MapError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().map_err(|err| {
            warn!(url, error = %err, "request failed");
            MapError::Fetch {
                url: url.to_string(),
                source: err,
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status");
            return Err(MapError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().map_err(|err| MapError::Fetch {
            url: url.to_string(),
            source: err,
        })?;
        debug!(url, bytes = body.len(), "response received");
        Ok(body)
    }
}
