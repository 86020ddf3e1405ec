// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction endpoints, served under `transaction/`

use serde::Deserialize;
use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{
    error::SolscanResult,
    group::GroupContext,
    query::{Endpoint, Filter},
};

const DEFAULT_LAST_FILTER: &str = "exceptVote";
const DEFAULT_LAST_LIMIT: u64 = 100;

fn default_last_filter() -> String {
    DEFAULT_LAST_FILTER.to_string()
}

fn default_last_limit() -> Option<u64> {
    Some(DEFAULT_LAST_LIMIT)
}

/// Request for [`TransactionApi::last`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LastTransactionsRequest {
    /// `exceptVote` by default, `all` to include vote transactions
    #[serde(default = "default_last_filter")]
    pub filter: String,
    /// Number of transactions, 100 by default
    #[serde(default = "default_last_limit")]
    pub limit: Option<u64>,
}

impl Default for LastTransactionsRequest {
    fn default() -> Self {
        Self {
            filter: default_last_filter(),
            limit: default_last_limit(),
        }
    }
}

impl Endpoint for LastTransactionsRequest {
    const PATH: &'static str = "last";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("filter", &self.filter),
            Filter::optional("limit", self.limit.as_ref()),
        ]
    }
}

/// Transaction endpoints, served under `transaction/`
#[derive(Debug)]
pub struct TransactionApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> TransactionApi<C> {
    pub(crate) const PREFIX: &'static str = "transaction/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Latest transactions
    pub async fn last(&self, request: &LastTransactionsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Detail of the transaction with signature `tx`
    pub async fn detail(&self, tx: &str) -> SolscanResult<Value> {
        self.inner
            .fetch("detail", &[Filter::required("tx", tx)])
            .await
    }

    /// Parsed actions of the transaction with signature `tx`
    pub async fn actions(&self, tx: &str) -> SolscanResult<Value> {
        self.inner
            .fetch("actions", &[Filter::required("tx", tx)])
            .await
    }
}
