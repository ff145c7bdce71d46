//! Configuration management for Wayfarer
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, WayfarerError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// The credential placeholder shipped in the default configuration
///
/// A key left at this value (or containing "example") is treated as
/// "not configured": the planner runs, but only ever in fallback mode.
pub const PLACEHOLDER_API_KEY: &str = "YOUR API KEY";

/// Main configuration structure for Wayfarer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generative API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Planner behavior settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Generative-language API configuration
///
/// Holds the endpoint, the credential, and the fixed generation parameters
/// sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full `generateContent` endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key; appended to the endpoint as the `key` query parameter
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Top-k sampling parameter
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Top-p sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Maximum tokens the model may generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        .to_string()
}

fn default_api_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_k() -> u32 {
    40
}

fn default_top_p() -> f64 {
    0.95
}

fn default_max_output_tokens() -> u32 {
    8192
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl ApiConfig {
    /// Explain why the credential is unusable, if it is
    ///
    /// Returns `None` when the key looks real. A key that is empty, still
    /// the shipped placeholder, or an obvious example value means the
    /// client must fail with `Unconfigured` before any network call.
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfarer::config::ApiConfig;
    ///
    /// let mut api = ApiConfig::default();
    /// assert!(api.credential_problem().is_some());
    ///
    /// api.api_key = "AIzaSyReal-Looking-Key".to_string();
    /// assert!(api.credential_problem().is_none());
    /// ```
    pub fn credential_problem(&self) -> Option<String> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Some("api key is empty".to_string());
        }
        if key == PLACEHOLDER_API_KEY {
            return Some("api key is still the shipped placeholder".to_string());
        }
        if key.to_lowercase().contains("example") {
            return Some("api key looks like an example value".to_string());
        }
        None
    }
}

/// Planner behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minimum number of characters a trip request must have
    #[serde(default = "default_min_request_len")]
    pub min_request_len: usize,
}

fn default_min_request_len() -> usize {
    5
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_request_len: default_min_request_len(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file with env and CLI overrides
    ///
    /// Missing files are not an error: the defaults are used so a fresh
    /// checkout runs (in fallback mode) without any setup. Environment
    /// variables are applied after the file, CLI overrides last.
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            tracing::debug!("Loading configuration from {}", path);
            Self::from_file(path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WayfarerError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| WayfarerError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(api_key) = std::env::var("WAYFARER_API_KEY") {
            self.api.api_key = api_key;
        }

        if let Ok(endpoint) = std::env::var("WAYFARER_API_ENDPOINT") {
            self.api.endpoint = endpoint;
        }

        if let Ok(min_len) = std::env::var("WAYFARER_MIN_REQUEST_LEN") {
            if let Ok(value) = min_len.parse() {
                self.planner.min_request_len = value;
            } else {
                tracing::warn!("Invalid WAYFARER_MIN_REQUEST_LEN: {}", min_len);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
        if let Some(api_key) = &cli.api_key {
            self.api.api_key = api_key.clone();
        }
    }

    /// Validate the configuration
    ///
    /// A placeholder credential is deliberately NOT a validation error:
    /// the planner must still run and serve fallback itineraries.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.endpoint).map_err(|e| {
            WayfarerError::Config(format!(
                "api.endpoint is not a valid URL ({}): {}",
                self.api.endpoint, e
            ))
        })?;

        if self.planner.min_request_len == 0 {
            return Err(
                WayfarerError::Config("planner.min_request_len must be at least 1".into()).into(),
            );
        }

        if let Some(problem) = self.api.credential_problem() {
            tracing::warn!("Running without a usable credential: {}", problem);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_cli() -> crate::cli::Cli {
        crate::cli::Cli {
            config: None,
            verbose: false,
            prefs_db: None,
            api_key: None,
            command: crate::cli::Commands::Last,
        }
    }

    #[test]
    fn test_default_config_matches_wire_contract() {
        let config = Config::default();
        assert!(config.api.endpoint.contains("generateContent"));
        assert_eq!(config.api.temperature, 0.7);
        assert_eq!(config.api.top_k, 40);
        assert_eq!(config.api.top_p, 0.95);
        assert_eq!(config.api.max_output_tokens, 8192);
        assert_eq!(config.planner.min_request_len, 5);
    }

    #[test]
    fn test_default_credential_is_a_placeholder() {
        let config = Config::default();
        assert!(config.api.credential_problem().is_some());
    }

    #[test]
    fn test_credential_problem_variants() {
        let mut api = ApiConfig::default();

        api.api_key = String::new();
        assert!(api.credential_problem().is_some());

        api.api_key = "   ".to_string();
        assert!(api.credential_problem().is_some());

        api.api_key = "my-example-key".to_string();
        assert!(api.credential_problem().is_some());

        api.api_key = "AIzaSySomethingPlausible".to_string();
        assert!(api.credential_problem().is_none());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
api:
  endpoint: "https://example.test/v1/models/gemini:generateContent"
  api_key: "secret"
planner:
  min_request_len: 10
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.planner.min_request_len, 10);
        // Unspecified fields fall back to defaults
        assert_eq!(config.api.top_k, 40);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.api.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_min_len() {
        let mut config = Config::default();
        config.planner.min_request_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_placeholder_credential() {
        // Fallback mode must work out of the box.
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        std::env::set_var("WAYFARER_API_KEY", "env-key");
        std::env::set_var("WAYFARER_MIN_REQUEST_LEN", "8");

        let config = Config::load("does-not-exist.yaml", &test_cli()).unwrap();
        assert_eq!(config.api.api_key, "env-key");
        assert_eq!(config.planner.min_request_len, 8);

        std::env::remove_var("WAYFARER_API_KEY");
        std::env::remove_var("WAYFARER_MIN_REQUEST_LEN");
    }

    #[test]
    #[serial]
    fn test_cli_api_key_wins_over_env() {
        std::env::set_var("WAYFARER_API_KEY", "env-key");

        let mut cli = test_cli();
        cli.api_key = Some("cli-key".to_string());
        let config = Config::load("does-not-exist.yaml", &cli).unwrap();
        assert_eq!(config.api.api_key, "cli-key");

        std::env::remove_var("WAYFARER_API_KEY");
    }
}
