//! Fetcher configuration.
//!
//! | Field | Default | Environment |
//! |-------|---------|-------------|
//! | `base_url` | `https://query1.finance.yahoo.com` | `FERROQUOTE_BASE_URL` |
//! | `timeout_ms` | `10000` | `FERROQUOTE_TIMEOUT_MS` |
//! | `user_agent` | `ferroquote/0.1.0` | `FERROQUOTE_USER_AGENT` |
//! | `auth` | none | `YAHOO_COOKIE` |

use crate::http_client::HttpAuth;
use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_USER_AGENT: &str = "ferroquote/0.1.0";

/// Transport settings for the quote provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub auth: HttpAuth,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(DEFAULT_USER_AGENT),
            auth: HttpAuth::None,
        }
    }
}

impl FetchConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`, keyed by env var name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup("FERROQUOTE_BASE_URL") {
            config = config.with_base_url(base_url)?;
        }

        if let Some(raw) = lookup("FERROQUOTE_TIMEOUT_MS") {
            let timeout_ms =
                raw.trim()
                    .parse::<u64>()
                    .map_err(|error| ValidationError::InvalidConfig {
                        key: "FERROQUOTE_TIMEOUT_MS",
                        reason: error.to_string(),
                    })?;
            config = config.with_timeout_ms(timeout_ms)?;
        }

        if let Some(user_agent) = lookup("FERROQUOTE_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.user_agent = user_agent.trim().to_owned();
            }
        }

        if let Some(cookie) = lookup("YAHOO_COOKIE") {
            if !cookie.trim().is_empty() {
                config.auth = HttpAuth::Cookie(cookie.trim().to_owned());
            }
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidConfig {
                key: "base_url",
                reason: String::from("must not be empty"),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ValidationError::InvalidConfig {
                key: "base_url",
                reason: format!("'{trimmed}' is not an http(s) URL"),
            });
        }
        self.base_url = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::InvalidConfig {
                key: "timeout_ms",
                reason: String::from("must be greater than zero"),
            });
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }
}
