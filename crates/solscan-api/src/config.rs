// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! [`SolscanConfig`] carries the API key together with the settings the
//! facades and the request helper need. It can be built directly from a key,
//! or loaded with hierarchical sources:
//!
//! 1. Default values
//! 2. Configuration file (`solscan.json`, optional)
//! 3. Environment variables with the `SOLSCAN_` prefix, e.g. `SOLSCAN_API_KEY`

use std::time::Duration;

use anyhow::{Result, ensure};
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::{Deserialize, Deserializer, de};
use solscan_http::HttpConfig;

use crate::{
    api_key::ApiKey,
    error::{SolscanError, SolscanResult},
    facade::{PRO_API_BASE_URL, PUBLIC_API_BASE_URL},
};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 300;
const DEFAULT_USER_AGENT: &str = concat!("solscan-api/", env!("CARGO_PKG_VERSION"));

/// A validated timeout duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutSeconds(u64);

impl TimeoutSeconds {
    /// Create a new `TimeoutSeconds`, ensuring the value is within valid bounds
    ///
    /// # Errors
    ///
    /// Returns an error if timeout is 0 or greater than 300 seconds
    pub fn new(seconds: u64) -> Result<Self> {
        ensure!(seconds != 0, "timeout must be greater than 0");
        ensure!(
            seconds <= MAX_TIMEOUT_SECONDS,
            "timeout cannot exceed {MAX_TIMEOUT_SECONDS}"
        );
        Ok(Self(seconds))
    }

    /// Create a safe default timeout (30 seconds)
    pub const fn default_value() -> Self {
        Self(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Get the timeout in whole seconds
    pub fn seconds(&self) -> u64 {
        self.0
    }

    /// Get the timeout as a duration
    pub fn value(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl<'de> Deserialize<'de> for TimeoutSeconds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = u64::deserialize(deserializer)?;
        Self::new(seconds).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl Default for TimeoutSeconds {
    fn default() -> Self {
        Self::default_value()
    }
}

/// Solscan client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SolscanConfig {
    /// Key sent in the `token` header
    pub api_key: ApiKey,
    /// Base URL of the main API, ending in `/`
    pub base_url: String,
    /// Base URL of the legacy public API, ending in `/`
    pub public_base_url: String,
    /// Per-request timeout (validated range: 1-300)
    pub timeout_seconds: TimeoutSeconds,
    /// User agent sent with every request
    pub user_agent: String,
}

impl SolscanConfig {
    /// Configuration with default settings for `api_key`
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: PRO_API_BASE_URL.to_string(),
            public_base_url: PUBLIC_API_BASE_URL.to_string(),
            timeout_seconds: TimeoutSeconds::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Load configuration from the environment and an optional `solscan.json`
    ///
    /// # Errors
    ///
    /// Returns `SolscanError::Config` if configuration is invalid or cannot be loaded.
    pub fn from_env() -> SolscanResult<Self> {
        Self::load().map_err(|e| SolscanError::config(format!("failed to load configuration: {e}")))
    }

    /// Load configuration using the config crate with hierarchical sources
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("solscan.json").required(false))
            .add_source(Environment::with_prefix("SOLSCAN").try_parsing(true));

        Self::from_builder(builder)
    }

    /// Apply defaults to `builder` and deserialize the result
    ///
    /// Sources already added to `builder` override the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing or a value is invalid.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder
            .set_default("base_url", PRO_API_BASE_URL)?
            .set_default("public_base_url", PUBLIC_API_BASE_URL)?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .build()?;

        config.try_deserialize()
    }

    /// Settings for the reqwest request helper
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_seconds: self.timeout_seconds.seconds(),
            user_agent: self.user_agent.clone(),
        }
    }
}
