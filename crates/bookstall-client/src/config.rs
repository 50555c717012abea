//! # Client Configuration
//!
//! Connection settings for the bookstore API.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Explicit values passed to [`ClientConfig::new`]
//! 2. Environment variables (`BOOKSTALL_*`)
//! 3. Defaults (local development backend)
//!
//! Configuration is read-only after initialization, so no lock is needed.

/// Default API origin for local development.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Connection settings for the bookstore API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, without a trailing slash (e.g. "https://api.example.com")
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ClientConfig { base_url }
    }

    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTALL_API_URL`: Override the API origin
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BOOKSTALL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        ClientConfig::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_default_points_at_local_backend() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_API_URL);
    }
}
