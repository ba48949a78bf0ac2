//! Client configuration

use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "HRMS_API_BASE_URL";

/// Default backend address (the local development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration for connecting to the HRMS backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Maximum transport attempts per call (including the first)
    pub max_attempts: u32,

    /// Base backoff delay; the delay after failed attempt `i` is
    /// `retry_base_delay * 2^i`
    pub retry_base_delay: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            max_attempts: 3,
            retry_base_delay: Duration::from_secs(1),
        }
    }

    /// Load the base URL from the environment (`HRMS_API_BASE_URL`),
    /// falling back to the local development server.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the retry policy. `max_attempts` includes the first try and is
    /// clamped to at least 1.
    pub fn with_retry(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_base_delay = base_delay;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
