// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for Solscan endpoint calls
//!
//! Validation failures ([`SolscanError::TypeMismatch`], [`SolscanError::Precondition`],
//! [`SolscanError::InvalidRequest`]) are raised before any request is sent. Failures of
//! the request helper are carried unchanged in [`SolscanError::Api`].

use solscan_http::ApiError;
use thiserror::Error;

use crate::query::FilterKind;

/// Result type alias for Solscan client operations
pub type SolscanResult<T> = Result<T, SolscanError>;

/// Errors returned by the Solscan client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SolscanError {
    /// A filter was supplied with a value of the wrong kind
    #[error("Wrong type for `{parameter}`: expected {expected}, found {found}")]
    TypeMismatch {
        parameter: String,
        expected: FilterKind,
        found: String,
    },

    /// A cross-field rule between filters was broken
    #[error("Precondition violated: {message}")]
    Precondition { message: String },

    /// A JSON request payload could not be turned into a request
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The request helper failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SolscanError {
    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SolscanError::TypeMismatch { .. }
                | SolscanError::Precondition { .. }
                | SolscanError::InvalidRequest { .. }
        )
    }
}
