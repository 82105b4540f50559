//! # Configuration Utilities
//!
//! Application configuration for the Versus client, loaded from a TOML file.
//! Every field has a default so the client works out of the box against a
//! locally running backend.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: AppConfig = load_config("config/versus.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Top-level client configuration.
///
/// # Example TOML
///
/// ```toml
/// api_base_url = "http://localhost:3000/api"
/// request_timeout_ms = 10000
/// credentials_path = "versus-credentials.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the poll/auth backend (no trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Deadline applied to every backend request, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Where the auth token and decryption code are persisted between runs
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_credentials_path() -> String {
    "versus-credentials.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            credentials_path: default_credentials_path(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist. A present-but-invalid file is still an error.
    pub fn from_file_or_default(path: &str) -> Result<Self> {
        if std::path::Path::new(path).exists() {
            load_config(path)
        } else {
            Ok(Self::default())
        }
    }
}
