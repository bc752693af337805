//! Application Configuration
//!
//! Values are baked in at compile time (`trunk build` reads the environment),
//! falling back to local development defaults.

use std::str::FromStr;

use tracing::Level;

/// Default backend location for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// localStorage key holding the access token
pub const DEFAULT_TOKEN_KEY: &str = "taskflow_token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    /// Browser storage key for the credential
    pub token_storage_key: String,
    /// Minimum level forwarded to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Build from `TASKFLOW_API_URL` / `TASKFLOW_LOG_LEVEL` captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TASKFLOW_API_URL"), option_env!("TASKFLOW_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let log_level = log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            token_storage_key: defaults.token_storage_key,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/ "), None);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).log_level, Level::DEBUG);
        assert_eq!(AppConfig::from_values(None, Some("WARN")).log_level, Level::WARN);
        // Unknown values keep the default
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, Level::INFO);
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = AppConfig::from_values(Some("  "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }
}
