//! Portal configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_SESSION_FILE: &str = ".clinic-session.json";

/// Portal configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the clinic backend (no trailing slash)
    pub api_base_url: String,
    /// Where the CLI persists the `token` / `userRole` entries
    pub session_file: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local use.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_base_url = normalize_base_url(
            &env::var("CLINIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )?;

        Ok(Self {
            api_base_url,
            session_file: env::var("CLINIC_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
        })
    }
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ConfigError::Invalid("CLINIC_API_URL", e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Invalid(
            "CLINIC_API_URL",
            format!("unsupported scheme {}", url.scheme()),
        ));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
