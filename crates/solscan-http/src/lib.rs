// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP GET helper for the Solscan API client
//!
//! This crate provides the single network primitive the endpoint groups rely on:
//! an HTTP GET that attaches a header mapping and returns the decoded JSON body.
//!
//! # Core Abstractions
//!
//! - **`HttpGet` Trait**: the request helper contract, `get(url, headers) -> JSON`
//! - **`HttpClient`**: the reqwest-backed implementation with a per-request timeout
//! - **Error Handling**: `ApiError` classifies transport, status and decoding failures
//!
//! The helper never interprets the JSON shape; callers receive the body as a
//! [`serde_json::Value`].

use serde_json::Value;
use thiserror::Error;

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

/// Request helper contract shared by every endpoint group
///
/// Implementations perform exactly one GET per call. Any failure, from the
/// connection up to an undecodable body, is reported as an [`ApiError`].
pub trait HttpGet: Send + Sync {
    /// Issue a GET request to `url` with `headers` attached and decode the JSON body
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, times out, the provider
    /// answers with a non-success status, or the body is not valid JSON
    fn get_json(
        &self,
        url: &str,
        headers: &Headers,
    ) -> impl Future<Output = Result<Value, ApiError>> + Send;
}

/// Errors raised by the request helper
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },

    /// Authentication failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Response body was not valid JSON
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// Provider answered with a non-success status
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Network timeout
    #[error("Request timeout after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },
}

impl ApiError {
    /// HTTP status code reported by the provider, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::RateLimitExceeded { .. } => Some(429),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::InvalidResponse {
                message: error.to_string(),
            }
        } else {
            ApiError::Http {
                message: error.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: error.to_string(),
        }
    }
}
