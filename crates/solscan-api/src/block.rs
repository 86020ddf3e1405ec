// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block endpoints, served under `block/`

use serde::Deserialize;
use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{
    error::SolscanResult,
    group::GroupContext,
    query::{Endpoint, Filter},
};

const DEFAULT_LAST_LIMIT: u64 = 100;

/// Request for [`BlockApi::transactions`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockTransactionsRequest {
    /// Block number
    pub block: u64,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
}

impl BlockTransactionsRequest {
    /// Request the transactions of `block`
    pub fn new(block: u64) -> Self {
        Self {
            block,
            ..Default::default()
        }
    }
}

impl Endpoint for BlockTransactionsRequest {
    const PATH: &'static str = "transactions";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("block", &self.block),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
        ]
    }
}

/// Block endpoints, served under `block/`
#[derive(Debug)]
pub struct BlockApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> BlockApi<C> {
    pub(crate) const PREFIX: &'static str = "block/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Latest blocks, 100 unless another `limit` is given
    pub async fn last(&self, limit: Option<u64>) -> SolscanResult<Value> {
        let limit = limit.unwrap_or(DEFAULT_LAST_LIMIT);
        self.inner
            .fetch("last", &[Filter::required("limit", &limit)])
            .await
    }

    /// Transactions in a block
    pub async fn transactions(&self, request: &BlockTransactionsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Detail of a block
    pub async fn detail(&self, block: u64) -> SolscanResult<Value> {
        self.inner
            .fetch("detail", &[Filter::required("block", &block)])
            .await
    }
}
