use serde::Deserialize;
use std::time::Duration;

/// Prefix shared by every environment variable the client reads.
pub const ENV_PREFIX: &str = "SEARCH_";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base address of the search service (`SEARCH_API_BASE_URL`),
    /// e.g. "http://localhost:8000". `/api/search` is appended to it.
    pub api_base_url: String,

    /// Transport timeout in seconds (`SEARCH_REQUEST_TIMEOUT_SECS`).
    /// Unset means the HTTP client never gives up on its own.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Emit JSON log lines instead of human-readable ones (`SEARCH_LOG_JSON`).
    #[serde(default)]
    pub log_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from the environment (and `.env`), with `base_url` taking
    /// precedence over `SEARCH_API_BASE_URL` when given.
    pub fn load(base_url: Option<String>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars(), base_url)
    }

    fn from_vars<I>(vars: I, base_url: Option<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let key = format!("{ENV_PREFIX}API_BASE_URL");
        let overridden = base_url.is_some();
        let vars = vars
            .into_iter()
            .filter(|(k, _)| !(overridden && *k == key))
            .chain(base_url.map(|url| (key.clone(), url)));
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
