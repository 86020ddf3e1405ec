// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Account endpoints
//!
//! Activities, transfers, balances and staking data for a single account,
//! all served under `account/`.

use serde::Deserialize;
use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{
    error::SolscanResult,
    group::GroupContext,
    query::{Endpoint, Filter},
};

/// Request for the `defi/activities` endpoints of the account and token groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefiActivitiesRequest {
    /// Account or token address
    pub address: String,
    /// Activity types, e.g. `ACTIVITY_TOKEN_SWAP` or `ACTIVITY_SPL_INIT_MINT`
    pub activity_type: Option<Vec<String>>,
    /// Only activities from this address
    pub from: Option<String>,
    /// Platform addresses, at most 5
    pub platform: Option<Vec<String>>,
    /// Source addresses, at most 5
    pub source: Option<Vec<String>>,
    /// Only activities involving this token
    pub token: Option<String>,
    /// `[start, end]` in unix seconds
    pub block_time: Option<Vec<u64>>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page: 10, 20, 30, 40, 60 or 100
    pub page_size: Option<u64>,
    /// Sort field, currently only `block_time`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

impl DefiActivitiesRequest {
    /// Request activities of `address` with no filters
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for DefiActivitiesRequest {
    const PATH: &'static str = "defi/activities";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::optional("activity_type", self.activity_type.as_ref()),
            Filter::optional("from", self.from.as_ref()),
            Filter::optional("platform", self.platform.as_ref()),
            Filter::optional("source", self.source.as_ref()),
            Filter::optional("token", self.token.as_ref()),
            Filter::optional("block_time", self.block_time.as_ref()),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`AccountApi::transfer`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountTransferRequest {
    /// Account address
    pub address: String,
    /// Transfer activity types, e.g. `ACTIVITY_SPL_TRANSFER`
    pub activity_type: Option<Vec<String>>,
    /// Only transfers touching this token account
    pub token_account: Option<String>,
    /// Only transfers from this address
    pub from: Option<String>,
    /// Only transfers to this address
    pub to: Option<String>,
    /// Only transfers of this token
    pub token: Option<String>,
    /// `[min, max]` amount range
    pub amount: Option<Vec<u64>>,
    /// `in` or `out`
    pub flow: Option<String>,
    /// Drop zero-amount transfers
    pub exclude_amount_zero: Option<bool>,
    /// `[start, end]` in unix seconds
    pub block_time: Option<Vec<u64>>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
    /// Sort field
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

impl AccountTransferRequest {
    /// Request transfers of `address` with no filters
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for AccountTransferRequest {
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
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`AccountApi::transfer_export`]
///
/// Same filters as [`AccountTransferRequest`] without paging or sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(missing_docs)]
pub struct TransferExportRequest {
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
}

impl TransferExportRequest {
    /// Export every transfer of `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for TransferExportRequest {
    const PATH: &'static str = "transfer/export";

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
        ]
    }
}

/// Request for [`AccountApi::token_accounts`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenAccountsRequest {
    /// Account address
    pub address: String,
    /// `token` or `nft`
    #[serde(rename = "type")]
    pub account_type: String,
    /// Hide token accounts with a zero balance
    pub hide_zero: Option<bool>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
}

impl TokenAccountsRequest {
    /// Request the `account_type` token accounts of `address`
    pub fn new(address: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            account_type: account_type.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for TokenAccountsRequest {
    const PATH: &'static str = "token-accounts";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::required("type", &self.account_type),
            Filter::optional("hide_zero", self.hide_zero.as_ref()),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
        ]
    }
}

/// Request for [`AccountApi::balance_change_activities`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BalanceChangeRequest {
    /// Account address
    pub address: String,
    /// Only changes of this token
    pub token: Option<String>,
    /// `[min, max]` amount range
    pub amount: Option<Vec<u64>>,
    /// `in` or `out`
    pub flow: Option<String>,
    /// Drop activities flagged as spam
    pub remove_spam: Option<bool>,
    /// `[start, end]` in unix seconds
    pub block_time: Option<Vec<u64>>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
    /// Sort field
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

impl BalanceChangeRequest {
    /// Request balance changes of `address` with no filters
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for BalanceChangeRequest {
    const PATH: &'static str = "balance_change";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::optional("token", self.token.as_ref()),
            Filter::optional("amount", self.amount.as_ref()),
            Filter::optional("flow", self.flow.as_ref()),
            Filter::optional("remove_spam", self.remove_spam.as_ref()),
            Filter::optional("block_time", self.block_time.as_ref()),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`AccountApi::transactions`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountTransactionsRequest {
    /// Account address
    pub address: String,
    /// Only transactions before this signature
    pub before: Option<String>,
    /// Number of transactions: 10, 20, 30 or 40
    pub limit: Option<u64>,
}

impl AccountTransactionsRequest {
    /// Request the latest transactions of `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for AccountTransactionsRequest {
    const PATH: &'static str = "transactions";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::optional("before", self.before.as_ref()),
            Filter::optional("limit", self.limit.as_ref()),
        ]
    }
}

/// Request for [`AccountApi::stake`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StakeRequest {
    /// Account address
    pub address: String,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
}

impl StakeRequest {
    /// Request stake accounts of `address`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

impl Endpoint for StakeRequest {
    const PATH: &'static str = "stake";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("address", &self.address),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
        ]
    }
}

/// Account endpoints, served under `account/`
#[derive(Debug)]
pub struct AccountApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> AccountApi<C> {
    pub(crate) const PREFIX: &'static str = "account/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Defi activities involving an account
    pub async fn defi_activities(&self, request: &DefiActivitiesRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Transfers of an account
    pub async fn transfer(&self, request: &AccountTransferRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Token or NFT accounts owned by an account
    pub async fn token_accounts(&self, request: &TokenAccountsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Balance change activities of an account
    pub async fn balance_change_activities(
        &self,
        request: &BalanceChangeRequest,
    ) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Latest transactions of an account
    pub async fn transactions(&self, request: &AccountTransactionsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Stake accounts of an account
    pub async fn stake(&self, request: &StakeRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Details of an account
    pub async fn detail(&self, address: &str) -> SolscanResult<Value> {
        self.inner
            .fetch("detail", &[Filter::required("address", address)])
            .await
    }

    /// Export the rewards of an account between two unix timestamps, at most 5000 items
    pub async fn rewards_export(
        &self,
        address: &str,
        time_from: u64,
        time_to: u64,
    ) -> SolscanResult<Value> {
        self.inner
            .fetch(
                "reward/export",
                &[
                    Filter::required("address", address),
                    Filter::required("time_from", &time_from),
                    Filter::required("time_to", &time_to),
                ],
            )
            .await
    }

    /// Export the transfers of an account
    pub async fn transfer_export(&self, request: &TransferExportRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }
}
