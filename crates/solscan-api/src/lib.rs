// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the Solscan REST API
//!
//! Every provider endpoint is one async method on an endpoint group. A method
//! validates its filters, assembles the query string and performs one GET
//! through the request helper, returning the decoded JSON body unmodified.
//!
//! # Architecture
//!
//! - **Facades**: [`SolscanApi`] hands out memoized endpoint groups,
//!   [`PublicApi`] serves the legacy public API
//! - **Endpoint Groups**: [`AccountApi`], [`TokenApi`], [`NftApi`],
//!   [`TransactionApi`], [`BlockApi`], [`MonitoringApi`]
//! - **Query Builder**: [`Filter`] and [`Query`] turn typed filters into
//!   deterministic query strings; [`Endpoint`] ties a request to its path
//! - **Configuration**: [`SolscanConfig`] loaded with the `config` crate
//!
//! Validation errors are returned before any request is sent, and failures of
//! the request helper are passed through unchanged in [`SolscanError::Api`].
//!
//! ```rust,no_run
//! use solscan_api::{AccountTransferRequest, SolscanApi};
//!
//! # async fn run() -> solscan_api::SolscanResult<()> {
//! let api = SolscanApi::new("my-api-key")?;
//!
//! let request = AccountTransferRequest {
//!     exclude_amount_zero: Some(true),
//!     ..AccountTransferRequest::new("4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R")
//! };
//! let transfers = api.account().transfer(&request).await?;
//! println!("{transfers}");
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod api_key;
pub mod block;
pub mod config;
pub mod error;
pub mod facade;
mod group;
pub mod monitoring;
pub mod nft;
pub mod query;
pub mod token;
pub mod transaction;

pub use account::*;
pub use api_key::ApiKey;
pub use block::*;
pub use crate::config::{SolscanConfig, TimeoutSeconds};
pub use error::{SolscanError, SolscanResult};
pub use facade::*;
pub use monitoring::*;
pub use nft::*;
pub use query::{Endpoint, Filter, FilterKind, FilterType, FilterValue, Query};
pub use solscan_http::{ApiError, Headers, HttpClient, HttpConfig, HttpGet};
pub use token::*;
pub use transaction::*;
