//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Revcontent API configuration
    pub api: ApiConfig,
    /// Default campaign parameters used by the orchestration run
    pub campaign: CampaignDefaults,
    /// Output configuration
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Revcontent API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: String,
    /// OAuth2 client ID
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Use the live HTTP client instead of the mocked one
    pub live: bool,
}

/// Default campaign parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignDefaults {
    /// Campaign name
    pub name: String,
    /// Total campaign budget in USD
    pub budget: f64,
    /// Default bid per click in USD
    pub bid_amount: f64,
    /// Targeted country codes (comma separated in the environment)
    pub country_codes: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON statistics dump, overwritten on every run
    pub stats_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the environment
    pub fn new() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            api: ApiConfig {
                base_url: get_env_or_default("API_URL", "https://api.revcontent.io"),
                client_id: require_env("CLIENT_ID")?,
                client_secret: require_env("CLIENT_SECRET")?,
                timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid REQUEST_TIMEOUT value".to_string()))?,
                live: get_env_or_default("REVCONTENT_LIVE", "false")
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid REVCONTENT_LIVE flag".to_string()))?,
            },
            campaign: CampaignDefaults {
                name: get_env_or_default("CAMPAIGN_NAME", "Test Campaign"),
                budget: get_env_or_default("CAMPAIGN_BUDGET", "50.0")
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid CAMPAIGN_BUDGET value".to_string()))?,
                bid_amount: get_env_or_default("CAMPAIGN_BID", "0.10")
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid CAMPAIGN_BID value".to_string()))?,
                country_codes: get_env_or_default("CAMPAIGN_COUNTRIES", "US")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            output: OutputConfig {
                stats_path: get_env_or_default("STATS_OUTPUT_PATH", "campaign_stats.json"),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> AppResult<()> {
        if self.api.client_id.trim().is_empty() {
            return Err(AppError::Configuration("CLIENT_ID cannot be empty".to_string()));
        }

        if self.api.client_secret.trim().is_empty() {
            return Err(AppError::Configuration("CLIENT_SECRET cannot be empty".to_string()));
        }

        // Validate URL format
        if !self.api.base_url.starts_with("http") {
            return Err(AppError::Configuration(
                "Invalid API_URL format, should start with 'http'".to_string(),
            ));
        }

        if self.api.timeout == 0 {
            return Err(AppError::Configuration("REQUEST_TIMEOUT cannot be 0".to_string()));
        }

        if self.campaign.budget <= 0.0 {
            return Err(AppError::Configuration("CAMPAIGN_BUDGET must be positive".to_string()));
        }

        if self.campaign.bid_amount <= 0.0 {
            return Err(AppError::Configuration("CAMPAIGN_BID must be positive".to_string()));
        }

        if self.campaign.country_codes.is_empty() {
            return Err(AppError::Configuration(
                "CAMPAIGN_COUNTRIES must list at least one country code".to_string(),
            ));
        }

        if self.output.stats_path.trim().is_empty() {
            return Err(AppError::Configuration("STATS_OUTPUT_PATH cannot be empty".to_string()));
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(AppError::Configuration(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(AppError::Configuration(format!(
                "Invalid log format: {}",
                self.logging.format
            )));
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get required environment variable, failing fast when absent
fn require_env(key: &str) -> AppResult<String> {
    env::var(key).map_err(|_| {
        AppError::Configuration(format!("{} environment variable not set", key))
    })
}
