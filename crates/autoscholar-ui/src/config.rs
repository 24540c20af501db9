//! Configuration for the AutoScholar view layer.

use std::time::Duration;

/// Backend API constants.
pub mod api {
    use std::time::Duration;

    /// Default backend origin (local development host).
    pub const BACKEND_URL: &str = "http://localhost:8080";

    /// Author search proxy endpoint.
    pub const SCHOLAR_PATH: &str = "api/scholar";

    /// Article persistence endpoint.
    pub const SAVE_PATH: &str = "db/save";

    /// Stored articles listing endpoint.
    pub const ARTICLES_PATH: &str = "db/articles";

    /// Delay before a failed save control returns to its call-to-action.
    pub const FAILURE_RESET_DELAY: Duration = Duration::from_secs(3);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Retries for idempotent GET requests.
    pub const MAX_RETRIES: u32 = 3;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Save control labels and markers.
pub mod labels {
    /// Call-to-action shown on an idle save control.
    pub const CALL_TO_ACTION: &str = "Add";

    /// Label while the save request is in flight.
    pub const SAVING: &str = "Saving...";

    /// Label after a successful save.
    pub const SAVED: &str = "Saved!";

    /// Label after a failed save.
    pub const FAILED: &str = "Failed";

    /// Class marking a save control in rendered markup.
    pub const SAVE_BUTTON_CLASS: &str = "save-button";

    /// Visual marker: request in flight.
    pub const SAVING_CLASS: &str = "saving";

    /// Visual marker: request succeeded.
    pub const SAVED_CLASS: &str = "saved";

    /// Visual marker: request failed.
    pub const FAILED_CLASS: &str = "failed";
}

/// View layer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:8080`.
    pub backend_url: String,

    /// Delay before a failed save control resets.
    pub reset_delay: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Whole-request timeout. `None` leaves fetches unbounded.
    pub request_timeout: Option<Duration>,

    /// Retry budget for GET requests. The save POST is never retried.
    pub max_retries: u32,
}

impl Config {
    /// Create a configuration for the given backend origin.
    #[must_use]
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            reset_delay: api::FAILURE_RESET_DELAY,
            connect_timeout: api::CONNECT_TIMEOUT,
            request_timeout: None,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            backend_url: base_url.to_string(),
            reset_delay: Duration::from_millis(50),
            connect_timeout: Duration::from_secs(2),
            request_timeout: Some(Duration::from_secs(5)),
            max_retries: 0, // Fail fast in tests
        }
    }

    /// Override the failure reset delay.
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `AUTOSCHOLAR_BACKEND_URL` and `AUTOSCHOLAR_RESET_DELAY_MS`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = std::env::var("AUTOSCHOLAR_BACKEND_URL")
            .unwrap_or_else(|_| api::BACKEND_URL.to_string());
        let mut config = Self::new(backend_url);

        if let Ok(raw) = std::env::var("AUTOSCHOLAR_RESET_DELAY_MS") {
            let millis: u64 = raw.parse().map_err(|e| {
                anyhow::anyhow!("AUTOSCHOLAR_RESET_DELAY_MS must be milliseconds: {e}")
            })?;
            config.reset_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert_eq!(config.reset_delay, Duration::from_secs(3));
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_config_for_testing_disables_retries() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.backend_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_with_reset_delay() {
        let config = Config::default().with_reset_delay(Duration::from_millis(10));
        assert_eq!(config.reset_delay, Duration::from_millis(10));
    }
}
