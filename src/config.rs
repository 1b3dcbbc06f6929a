//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

use crate::error::Result;

/// Application configuration loaded from environment variables.
///
/// Every field has a default, so an empty environment yields a working
/// configuration pointed at the public Kalshi endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Endpoints ===
    /// Trade API base URL.
    #[serde(default = "default_api_url")]
    pub kalshi_api_url: String,

    /// Public website base, used to rebuild market page URLs.
    #[serde(default = "default_web_url")]
    pub kalshi_web_url: String,

    // === Requests ===
    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Event status filter sent to `/events`.
    #[serde(default = "default_event_status")]
    pub event_status: String,

    /// Browse size used when the CLI is not given `--max`.
    #[serde(default = "default_max_markets")]
    pub default_max_markets: usize,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_api_url() -> String {
    "https://api.elections.kalshi.com/trade-api/v2".to_string()
}

fn default_web_url() -> String {
    "https://kalshi.com".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_event_status() -> String {
    "open".to_string()
}

fn default_max_markets() -> usize {
    20
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kalshi_api_url: default_api_url(),
            kalshi_web_url: default_web_url(),
            http_timeout_ms: default_http_timeout_ms(),
            event_status: default_event_status(),
            default_max_markets: default_max_markets(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Err(e) = Url::parse(&self.kalshi_api_url) {
            return Err(format!("KALSHI_API_URL is not a valid URL: {e}"));
        }

        if let Err(e) = Url::parse(&self.kalshi_web_url) {
            return Err(format!("KALSHI_WEB_URL is not a valid URL: {e}"));
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        if self.default_max_markets == 0 {
            return Err("DEFAULT_MAX_MARKETS must be greater than 0".to_string());
        }

        if self.event_status.trim().is_empty() {
            return Err("EVENT_STATUS must not be empty".to_string());
        }

        Ok(())
    }

    /// Website base without a trailing slash.
    pub fn web_base(&self) -> &str {
        self.kalshi_web_url.trim_end_matches('/')
    }
}
