pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/location/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct MapConfig {
    /// First-page URL of the location collection.
    pub base_url: String,
    /// Per-request timeout; `0` disables it.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub prompt: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("pokemap/{}", env!("CARGO_PKG_VERSION")),
            prompt: None,
        }
    }
}

impl MapConfig {
    pub fn timeout(&self) -> Option<std::time::Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(std::time::Duration::from_secs(self.timeout_secs))
        }
    }
}
