// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! reqwest-backed request helper
//!
//! [`HttpClient`] issues a single GET per call, bounded by the configured
//! timeout, and maps provider status codes onto [`ApiError`] variants.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::RETRY_AFTER};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{ApiError, Headers, HttpGet};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;
const DEFAULT_USER_AGENT: &str = concat!("solscan-api/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP request helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP GET helper built on reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new request helper
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the underlying HTTP client
    /// cannot be built
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        if config.timeout_seconds == 0 {
            return Err(ApiError::Configuration {
                message: "timeout must be greater than 0".to_string(),
            });
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Configuration this helper was built with
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }
}

impl HttpGet for HttpClient {
    async fn get_json(&self, url: &str, headers: &Headers) -> Result<Value, ApiError> {
        debug!(url, "sending GET request");

        let mut request = self
            .client
            .get(url)
            .header("accept", "application/json");
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = timeout(
            Duration::from_secs(self.config.timeout_seconds),
            request.send(),
        )
        .await
        .map_err(|_| ApiError::Timeout {
            timeout_seconds: self.config.timeout_seconds,
        })??;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!(url, status = status.as_u16(), "provider rejected credentials");
                Err(ApiError::Authentication {
                    message: format!("provider returned status {}", status.as_u16()),
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after_seconds = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.trim().parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS);
                warn!(url, retry_after_seconds, "provider rate limit exceeded");
                Err(ApiError::RateLimitExceeded {
                    retry_after_seconds,
                })
            }
            status => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!(
                    url,
                    status = status.as_u16(),
                    message = %message,
                    "provider returned an error"
                );
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_success() {
        let client = HttpClient::new(HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation_rejects_zero_timeout() {
        let config = HttpConfig {
            timeout_seconds: 0,
            ..Default::default()
        };

        let client = HttpClient::new(config);
        assert!(matches!(
            client.unwrap_err(),
            ApiError::Configuration { .. }
        ));
    }

    #[test]
    fn default_config() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.starts_with("solscan-api/"));
    }
}
