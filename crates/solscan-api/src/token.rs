// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token endpoints, served under `token/`

use serde::Deserialize;
use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{
    account::DefiActivitiesRequest,
    error::SolscanResult,
    group::GroupContext,
    query::{Endpoint, Filter, first_page},
};

const DEFAULT_TRENDING_LIMIT: u64 = 10;

/// Request for [`TokenApi::markets`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketsRequest {
    /// Token addresses, at least one
    pub token: Vec<String>,
    /// Sort field
    pub sort_by: Option<String>,
    /// Program addresses of the markets
    pub program: Option<Vec<String>>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
}

impl MarketsRequest {
    /// Request the markets of `tokens`
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: tokens.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Endpoint for MarketsRequest {
    const PATH: &'static str = "markets";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("token", &self.token),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("program", self.program.as_ref()),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
        ]
    }
}

/// Request for [`TokenApi::transfer`]
///
/// Same filters as the account transfer endpoint, without paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct TokenTransferRequest {
    pub address: String,
    pub activity_type: Option<Vec<String>>,
    pub token_account: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub token: Option<String>,
    pub amount: Option<Vec<u64>>,
    pub flow: Option<String>,
    pub exclude_amount_zero: Option<bool>,
    pub block_time: Option<Vec<u64>>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl TokenTransferRequest {
    /// Request transfers of the token at `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for TokenTransferRequest {
    const PATH: &'static str = "transfer";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::optional("activity_type", self.activity_type.as_ref()),
            Filter::optional("token_account", self.token_account.as_ref()),
            Filter::optional("from", self.from.as_ref()),
            Filter::optional("to", self.to.as_ref()),
            Filter::optional("token", self.token.as_ref()),
            Filter::optional("amount", self.amount.as_ref()),
            Filter::optional("flow", self.flow.as_ref()),
            Filter::optional("exclude_amount_zero", self.exclude_amount_zero.as_ref()),
            Filter::optional("block_time", self.block_time.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`TokenApi::list`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenListRequest {
    /// Page number, starts at 1
    #[serde(default = "first_page")]
    pub page: u64,
    /// Items per page
    pub page_size: Option<u64>,
    /// Sort field, e.g. `holder` or `market_cap`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

impl Default for TokenListRequest {
    fn default() -> Self {
        Self {
            page: first_page(),
            page_size: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl Endpoint for TokenListRequest {
    const PATH: &'static str = "list";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("page", &self.page),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`TokenApi::holders`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoldersRequest {
    /// Token address
    pub address: String,
    /// Page number, starts at 1
    #[serde(default = "first_page")]
    pub page: u64,
    /// Items per page
    pub page_size: Option<u64>,
    /// Minimum holding amount
    pub from_amount: Option<u64>,
    /// Maximum holding amount
    pub to_amount: Option<u64>,
}

impl HoldersRequest {
    /// Request the first page of holders of the token at `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Default for HoldersRequest {
    fn default() -> Self {
        Self {
            address: String::new(),
            page: first_page(),
            page_size: None,
            from_amount: None,
            to_amount: None,
        }
    }
}

impl Endpoint for HoldersRequest {
    const PATH: &'static str = "holders";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::required("page", &self.page),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("from_amount", self.from_amount.as_ref()),
            Filter::optional("to_amount", self.to_amount.as_ref()),
        ]
    }
}

/// Token endpoints, served under `token/`
#[derive(Debug)]
pub struct TokenApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> TokenApi<C> {
    pub(crate) const PREFIX: &'static str = "token/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Metadata of a token
    pub async fn meta(&self, address: &str) -> SolscanResult<Value> {
        self.inner
            .fetch("meta", &[Filter::required("address", address)])
            .await
    }

    /// Markets trading the given tokens
    pub async fn markets(&self, request: &MarketsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Market info of a token
    pub async fn market_info(&self, address: &str) -> SolscanResult<Value> {
        self.inner
            .fetch("market/info", &[Filter::required("address", address)])
            .await
    }

    /// Transfers of a token
    pub async fn transfer(&self, request: &TokenTransferRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Defi activities involving a token
    pub async fn defi_activities(&self, request: &DefiActivitiesRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Paged list of tokens
    pub async fn list(&self, request: &TokenListRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Daily market volume of a token; `time` is `[start, end]` as `YYYYMMDD`
    pub async fn market_volume(&self, address: &str, time: Option<&[u64]>) -> SolscanResult<Value> {
        let time = time.map(<[u64]>::to_vec);
        self.inner
            .fetch(
                "market/volume",
                &[
                    Filter::required("address", address),
                    Filter::optional("time", time.as_ref()),
                ],
            )
            .await
    }

    /// Trending tokens, 10 unless another `limit` is given
    pub async fn trending(&self, limit: Option<u64>) -> SolscanResult<Value> {
        let limit = limit.unwrap_or(DEFAULT_TRENDING_LIMIT);
        self.inner
            .fetch("trending", &[Filter::required("limit", &limit)])
            .await
    }

    /// Daily price history of a token; `time` is `[start, end]` as `YYYYMMDD`
    pub async fn price(&self, address: &str, time: Option<&[u64]>) -> SolscanResult<Value> {
        let time = time.map(<[u64]>::to_vec);
        self.inner
            .fetch(
                "price",
                &[
                    Filter::required("address", address),
                    Filter::optional("time", time.as_ref()),
                ],
            )
            .await
    }

    /// Holders of a token
    pub async fn holders(&self, request: &HoldersRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Top tokens
    pub async fn top(&self) -> SolscanResult<Value> {
        self.inner.fetch("top", &[]).await
    }
}
