//! Configuration handling.
//!
//! Configuration is stored in `.roster/config.yaml` and includes:
//! - The company listing endpoint
//! - Page size and prefetch window
//! - Initial load delay and request timeout
//! - Where the accumulated company list is persisted

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::types::DEFAULT_PAGE_SIZE;

/// Directory holding roster configuration and data
pub const ROSTER_DIR: &str = ".roster";

const DEFAULT_INITIAL_DELAY_MS: u64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Company listing endpoint, e.g. `http://localhost:3000/api/companies`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Companies requested per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Delay before the first page is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_ms: Option<u64>,

    /// Maximum number of page requests outstanding at once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_in_flight: Option<usize>,

    /// HTTP request timeout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Directory for the persisted company list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(ROSTER_DIR).join("config.yaml")
    }

    /// Load configuration from the default path, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == Some(0) {
            return Err(RosterError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_in_flight == Some(0) {
            return Err(RosterError::Config(
                "max_in_flight must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the endpoint from environment variable or config file
    pub fn endpoint(&self) -> Option<String> {
        if let Ok(endpoint) = env::var("ROSTER_ENDPOINT")
            && !endpoint.is_empty()
        {
            return Some(endpoint);
        }

        self.endpoint.clone()
    }

    /// Get the page size from environment variable or config file
    pub fn page_size(&self) -> Result<u32> {
        if let Ok(raw) = env::var("ROSTER_PAGE_SIZE")
            && !raw.is_empty()
        {
            return match raw.parse::<u32>() {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(RosterError::Config(format!(
                    "ROSTER_PAGE_SIZE must be a positive integer, got '{raw}'"
                ))),
            };
        }

        Ok(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms.unwrap_or(DEFAULT_INITIAL_DELAY_MS))
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.unwrap_or(1)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Directory for the persisted company list, if persistence is enabled
    pub fn store_dir(&self) -> Option<PathBuf> {
        self.store_dir.clone()
    }
}
