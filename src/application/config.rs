/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_SESSION_FILE, DEFAULT_SITE_URL, DEFAULT_TIMEOUT_MS,
};
use crate::utils::config::{get_env_base_url, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Site-level settings
pub struct SiteConfig {
    /// Human-readable site name
    pub name: String,
    /// Site root, where logout navigates to
    pub url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl RestApiConfig {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Where the durable session lives
pub struct StorageConfig {
    /// Path of the JSON session file
    pub session_file: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the platform client
pub struct Config {
    /// Site settings
    pub site: SiteConfig,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Session storage configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` first, then reads:
    /// * `EDU_SITE_NAME` / `EDU_SITE_URL`
    /// * `EDU_API_BASE_URL` / `EDU_API_TIMEOUT_MS`
    /// * `EDU_SESSION_FILE`
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            site: SiteConfig {
                name: get_env_or_default("EDU_SITE_NAME", String::from("Образование")),
                url: get_env_or_default("EDU_SITE_URL", String::from(DEFAULT_SITE_URL)),
            },
            rest_api: RestApiConfig {
                base_url: get_env_base_url("EDU_API_BASE_URL", DEFAULT_API_BASE_URL),
                timeout_ms: get_env_or_default("EDU_API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            },
            storage: StorageConfig {
                session_file: get_env_or_default(
                    "EDU_SESSION_FILE",
                    String::from(DEFAULT_SESSION_FILE),
                ),
            },
        }
    }

    /// Configuration pointing at a specific API, other values from the environment
    pub fn with_base_url(base_url: &str) -> Self {
        let mut config = Self::new();
        config.rest_api.base_url = base_url.trim_end_matches('/').to_string();
        config
    }
}
