// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated Solscan API key
//!
//! [`ApiKey`] guarantees at construction that the key holds at least one
//! non-whitespace character, so the `token` header is never sent empty.
//! Its `Debug` output is redacted; use [`ApiKey::expose`] to read the value.
//!
//! ```rust
//! use solscan_api::ApiKey;
//!
//! let key = ApiKey::new("my-secret-key").unwrap();
//! assert_eq!(key.expose(), "my-secret-key");
//! assert_eq!(format!("{key:?}"), "ApiKey(\"***\")");
//!
//! assert!(ApiKey::new("").is_err());
//! assert!(ApiKey::new("  \t ").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

use crate::error::SolscanError;

/// A non-empty API key
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Create a new `ApiKey` from any string-like input
    ///
    /// # Validation Rules
    ///
    /// - Empty strings (`""`) are rejected
    /// - Whitespace-only strings (`"   "`, `"\t\n"`) are rejected
    /// - Keys are stored as given, surrounding whitespace included
    pub fn new(key: impl Into<String>) -> Result<Self, SolscanError> {
        let key = key.into();
        if key.trim().is_empty() {
            Err(SolscanError::config(
                "API key cannot be empty or whitespace-only",
            ))
        } else {
            Ok(ApiKey(key.into_boxed_str()))
        }
    }

    /// Get the key value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"***").finish()
    }
}

impl FromStr for ApiKey {
    type Err = SolscanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::new(key).map_err(|e| de::Error::custom(e.to_string()))
    }
}
