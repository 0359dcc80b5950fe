//! Client configuration, passed in explicitly

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

const API_URL_ENV: &str = "OBSVIEW_API_URL";
const TIMEOUT_ENV: &str = "OBSVIEW_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8000/api`
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Defaults overridden by `OBSVIEW_API_URL` and `OBSVIEW_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }
        if let Some(secs) = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(API_URL_ENV, "http://obs.internal:9000/api");
        std::env::set_var(TIMEOUT_ENV, "5");
        let config = ClientConfig::from_env();
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);

        assert_eq!(config.base_url, "http://obs.internal:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_garbage() {
        std::env::set_var(API_URL_ENV, "   ");
        std::env::set_var(TIMEOUT_ENV, "soon");
        let config = ClientConfig::from_env();
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);

        assert_eq!(config, ClientConfig::default());
    }
}
