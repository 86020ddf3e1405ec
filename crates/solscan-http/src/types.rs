// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Header mapping passed alongside every request

use std::collections::BTreeMap;

/// Header name to value mapping attached to a request
///
/// Ordered so that logging and request construction are deterministic.
pub type Headers = BTreeMap<String, String>;

/// Build a header mapping holding a single entry
pub fn single_header(name: impl Into<String>, value: impl Into<String>) -> Headers {
    let mut headers = Headers::new();
    headers.insert(name.into(), value.into());
    headers
}
