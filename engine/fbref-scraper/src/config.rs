//! HTTP settings for the FBref scraper

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Browser user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the FBref scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Delay before every request in milliseconds
    pub request_delay_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            request_delay_ms: 4000, // FBref rate-limits aggressive clients
        }
    }
}

impl ScraperConfig {
    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get the politeness delay applied before each request
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.request_delay(), Duration::from_secs(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let config = ScraperConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = ScraperConfig { user_agent: "  ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
