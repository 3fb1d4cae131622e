//! Configuration management for the traceability dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable consulted when no Gemini key is configured
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Gemini report generation configuration
    pub gemini: GeminiConfig,

    /// In-memory data configuration
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key; reports degrade to an explanatory message when absent
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the generative language API
    pub api_endpoint: String,

    /// Model used for reports
    pub model: String,

    /// HTTP timeout for one report request
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Load the demo snapshot at startup instead of an empty one
    pub seed_on_startup: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default("gemini.timeout_secs", 60)?
            .set_default("data.seed_on_startup", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;
        config.gemini.api_key = resolve_api_key(config.gemini.api_key.take(), || {
            std::env::var(FALLBACK_API_KEY_VAR).ok()
        });
        Ok(config)
    }
}

/// Prefer the configured key, then the fallback; blank keys count as missing
fn resolve_api_key(
    configured: Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> Option<String> {
    configured
        .filter(|k| !k.trim().is_empty())
        .or_else(fallback)
        .filter(|k| !k.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_on_startup: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_key_wins() {
        let key = resolve_api_key(Some("abc".to_string()), || Some("env".to_string()));
        assert_eq!(key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_key_falls_back() {
        let key = resolve_api_key(Some("  ".to_string()), || Some("env".to_string()));
        assert_eq!(key.as_deref(), Some("env"));
    }

    #[test]
    fn test_missing_everywhere() {
        assert_eq!(resolve_api_key(None, || None), None);
        assert_eq!(resolve_api_key(None, || Some(String::new())), None);
    }
}
