// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared query-string assembly
//!
//! Every endpoint declares its parameters as an ordered list of [`Filter`]s.
//! [`Query::build`] walks that list once: absent filters are skipped, present
//! filters are checked against their declared [`FilterKind`] and serialized.
//!
//! # Serialization
//!
//! | kind | output |
//! |---|---|
//! | string, integer | `name=value` |
//! | boolean | `name=true` / `name=false` |
//! | list | one `name[]=element` per element, in order |
//!
//! Values are percent-encoded; names are emitted verbatim.
//!
//! ```rust
//! use solscan_api::{Filter, Query};
//!
//! let query = Query::build(&[
//!     Filter::required("token", &vec!["A".to_string(), "B".to_string()]),
//!     Filter::optional::<String>("sort_by", None),
//!     Filter::optional("page", Some(&2_u64)),
//! ])
//! .unwrap();
//! assert_eq!(query.to_string(), "token[]=A&token[]=B&page=2");
//! ```

use core::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::form_urlencoded::byte_serialize;

use crate::error::{SolscanError, SolscanResult};

/// Kind a filter value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Scalar string
    String,
    /// Scalar non-negative integer
    Integer,
    /// Scalar boolean
    Boolean,
    /// List of strings
    StringList,
    /// List of non-negative integers
    IntegerList,
}

impl FilterKind {
    /// Human readable name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::String => "string",
            FilterKind::Integer => "integer",
            FilterKind::Boolean => "boolean",
            FilterKind::StringList => "list of strings",
            FilterKind::IntegerList => "list of integers",
        }
    }

    /// Check whether a JSON value has this kind
    pub fn matches_json(self, value: &Value) -> bool {
        match self {
            FilterKind::String => value.is_string(),
            FilterKind::Integer => value.is_u64(),
            FilterKind::Boolean => value.is_boolean(),
            FilterKind::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            FilterKind::IntegerList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_u64)),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter value of one of the supported kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FilterValue {
    String(String),
    Integer(u64),
    Boolean(bool),
    StringList(Vec<String>),
    IntegerList(Vec<u64>),
}

impl FilterValue {
    /// Kind of this value
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::String(_) => FilterKind::String,
            FilterValue::Integer(_) => FilterKind::Integer,
            FilterValue::Boolean(_) => FilterKind::Boolean,
            FilterValue::StringList(_) => FilterKind::StringList,
            FilterValue::IntegerList(_) => FilterKind::IntegerList,
        }
    }
}

/// Rust types that map onto a [`FilterKind`]
pub trait FilterType {
    /// Kind declared for filters of this type
    const KIND: FilterKind;

    /// Convert into a filter value
    fn to_filter_value(&self) -> FilterValue;
}

impl FilterType for str {
    const KIND: FilterKind = FilterKind::String;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.to_string())
    }
}

impl FilterType for String {
    const KIND: FilterKind = FilterKind::String;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::String(self.clone())
    }
}

impl FilterType for u64 {
    const KIND: FilterKind = FilterKind::Integer;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::Integer(*self)
    }
}

impl FilterType for bool {
    const KIND: FilterKind = FilterKind::Boolean;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::Boolean(*self)
    }
}

impl FilterType for Vec<String> {
    const KIND: FilterKind = FilterKind::StringList;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::StringList(self.clone())
    }
}

impl FilterType for Vec<u64> {
    const KIND: FilterKind = FilterKind::IntegerList;

    fn to_filter_value(&self) -> FilterValue {
        FilterValue::IntegerList(self.clone())
    }
}

/// A named query parameter with its declared kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    name: &'static str,
    kind: FilterKind,
    value: Option<FilterValue>,
}

impl Filter {
    /// Create a filter from its parts
    ///
    /// The value is not checked here; a mismatch with `kind` is reported when
    /// the filter is added to a [`Query`].
    pub fn new(name: &'static str, kind: FilterKind, value: Option<FilterValue>) -> Self {
        Self { name, kind, value }
    }

    /// A filter that is always present
    pub fn required<T: FilterType + ?Sized>(name: &'static str, value: &T) -> Self {
        Self::new(name, T::KIND, Some(value.to_filter_value()))
    }

    /// A filter that contributes nothing when `value` is `None`
    pub fn optional<T: FilterType + ?Sized>(name: &'static str, value: Option<&T>) -> Self {
        Self::new(name, T::KIND, value.map(|value| value.to_filter_value()))
    }

    /// Query parameter name, without the `[]` list suffix
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Supplied value, if any
    pub fn value(&self) -> Option<&FilterValue> {
        self.value.as_ref()
    }
}

/// An assembled query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    segments: Vec<String>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a query from filters in the given order
    ///
    /// # Errors
    ///
    /// Returns [`SolscanError::TypeMismatch`] for the first present filter whose
    /// value does not match its declared kind
    pub fn build(filters: &[Filter]) -> SolscanResult<Self> {
        let mut query = Self::new();
        for filter in filters {
            query.push(filter)?;
        }
        Ok(query)
    }

    /// Append one filter
    ///
    /// # Errors
    ///
    /// Returns [`SolscanError::TypeMismatch`] if the value does not match the
    /// declared kind; the query is left unchanged in that case
    pub fn push(&mut self, filter: &Filter) -> SolscanResult<()> {
        let Some(value) = filter.value() else {
            return Ok(());
        };

        if value.kind() != filter.kind() {
            return Err(SolscanError::TypeMismatch {
                parameter: filter.name().to_string(),
                expected: filter.kind(),
                found: value.kind().to_string(),
            });
        }

        let name = filter.name();
        match value {
            FilterValue::String(value) => self.append(name, value),
            FilterValue::Integer(value) => self.append(name, &value.to_string()),
            FilterValue::Boolean(value) => self.append(name, if *value { "true" } else { "false" }),
            FilterValue::StringList(items) => {
                let key = format!("{name}[]");
                for item in items {
                    self.append(&key, item);
                }
            }
            FilterValue::IntegerList(items) => {
                let key = format!("{name}[]");
                for item in items {
                    self.append(&key, &item.to_string());
                }
            }
        }
        Ok(())
    }

    /// Check if no segment was emitted
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Individual `key=value` segments in emission order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Append this query to `base`, adding `?` only when there is something to append
    pub fn to_url(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{self}")
        }
    }

    fn append(&mut self, key: &str, value: &str) {
        let value: String = byte_serialize(value.as_bytes()).collect();
        self.segments.push(format!("{key}={value}"));
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("&"))
    }
}

/// One provider endpoint: a path under its group and an ordered filter list
///
/// Request structs implement this trait; the owning endpoint group resolves
/// [`Endpoint::PATH`] against its URL prefix.
pub trait Endpoint {
    /// Path relative to the group prefix
    const PATH: &'static str;

    /// Filters in the order they are emitted, required ones included
    fn filters(&self) -> Vec<Filter>;

    /// Cross-field rules that must hold before the query is built
    ///
    /// # Errors
    ///
    /// Returns [`SolscanError::Precondition`] when a rule is broken
    fn check(&self) -> SolscanResult<()> {
        Ok(())
    }

    /// Check the request and assemble its query string
    ///
    /// # Errors
    ///
    /// Returns the first precondition or type-mismatch error encountered
    fn query(&self) -> SolscanResult<Query> {
        self.check()?;
        Query::build(&self.filters())
    }

    /// Build a request from a JSON object keyed by query parameter name
    ///
    /// Every present, non-null field is checked against the declared kind of
    /// the filter with the same name before the request is decoded, so a value
    /// of the wrong kind is reported as [`SolscanError::TypeMismatch`] and
    /// never coerced. A `null` field counts as not supplied and takes the
    /// field's default.
    ///
    /// # Errors
    ///
    /// Returns [`SolscanError::TypeMismatch`] for a value of the wrong kind and
    /// [`SolscanError::InvalidRequest`] when the payload is not an object, has
    /// unknown fields, or lacks a required field
    fn from_json(value: Value) -> SolscanResult<Self>
    where
        Self: Sized + Default + DeserializeOwned,
    {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(SolscanError::InvalidRequest {
                    message: format!("expected a JSON object, found {}", json_kind(&other)),
                });
            }
        };

        for filter in Self::default().filters() {
            if let Some(field) = fields.get(filter.name())
                && !field.is_null()
                && !filter.kind().matches_json(field)
            {
                return Err(SolscanError::TypeMismatch {
                    parameter: filter.name().to_string(),
                    expected: filter.kind(),
                    found: json_kind(field).to_string(),
                });
            }
        }

        let supplied: Map<String, Value> = fields
            .into_iter()
            .filter(|(_, field)| !field.is_null())
            .collect();

        serde_json::from_value(Value::Object(supplied)).map_err(|e| SolscanError::InvalidRequest {
            message: e.to_string(),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

pub(crate) fn first_page() -> u64 {
    1
}

pub(crate) fn some_first_page() -> Option<u64> {
    Some(1)
}
