// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Entry points of the client
//!
//! [`SolscanApi`] owns the API key and hands out one instance of each
//! endpoint group. Groups are built on first access and reused afterwards;
//! concurrent first accesses still build exactly one instance.
//!
//! [`PublicApi`] covers the legacy public API, which only serves chain info.

use core::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;
use solscan_http::{Headers, HttpClient, HttpGet, single_header};
use tracing::info;

use crate::{
    account::AccountApi,
    api_key::ApiKey,
    block::BlockApi,
    config::SolscanConfig,
    error::SolscanResult,
    group::GroupContext,
    monitoring::MonitoringApi,
    nft::NftApi,
    token::TokenApi,
    transaction::TransactionApi,
};

/// Base URL of the main API
pub const PRO_API_BASE_URL: &str = "https://pro-api.solscan.io/v2.0/";

/// Base URL of the legacy public API
pub const PUBLIC_API_BASE_URL: &str = "https://public-api.solscan.io/";

/// Header carrying the API key
pub const AUTH_HEADER: &str = "token";

fn normalize_base_url(base_url: impl Into<String>) -> String {
    let mut base_url = base_url.into();
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

fn auth_headers(api_key: &ApiKey) -> Headers {
    single_header(AUTH_HEADER, api_key.expose())
}

/// Client for the main Solscan API
pub struct SolscanApi<C = HttpClient> {
    client: Arc<C>,
    base_url: String,
    api_key: ApiKey,
    account: OnceLock<AccountApi<C>>,
    token: OnceLock<TokenApi<C>>,
    nft: OnceLock<NftApi<C>>,
    transaction: OnceLock<TransactionApi<C>>,
    block: OnceLock<BlockApi<C>>,
    monitoring: OnceLock<MonitoringApi<C>>,
}

impl SolscanApi<HttpClient> {
    /// Create a client for the main API with default settings
    ///
    /// # Errors
    ///
    /// Returns `SolscanError::Config` if the key is empty or whitespace-only
    pub fn new(api_key: impl Into<String>) -> SolscanResult<Self> {
        Self::from_config(&SolscanConfig::new(ApiKey::new(api_key)?))
    }

    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the request helper cannot be built
    pub fn from_config(config: &SolscanConfig) -> SolscanResult<Self> {
        let client = HttpClient::new(config.http_config())?;
        info!(
            base_url = %config.base_url,
            timeout_seconds = config.timeout_seconds.seconds(),
            "Solscan client configured"
        );
        Ok(Self::with_client(
            config.api_key.clone(),
            config.base_url.clone(),
            client,
        ))
    }
}

impl<C: HttpGet> SolscanApi<C> {
    /// Create a client over any request helper
    ///
    /// A missing trailing `/` on `base_url` is added.
    pub fn with_client(api_key: ApiKey, base_url: impl Into<String>, client: C) -> Self {
        Self {
            client: Arc::new(client),
            base_url: normalize_base_url(base_url),
            api_key,
            account: OnceLock::new(),
            token: OnceLock::new(),
            nft: OnceLock::new(),
            transaction: OnceLock::new(),
            block: OnceLock::new(),
            monitoring: OnceLock::new(),
        }
    }

    /// Base URL the group prefixes are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Key sent with every request
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Account endpoints
    pub fn account(&self) -> &AccountApi<C> {
        self.account
            .get_or_init(|| AccountApi::new(self.context(AccountApi::<C>::PREFIX)))
    }

    /// Token endpoints
    pub fn token(&self) -> &TokenApi<C> {
        self.token
            .get_or_init(|| TokenApi::new(self.context(TokenApi::<C>::PREFIX)))
    }

    /// NFT endpoints
    pub fn nft(&self) -> &NftApi<C> {
        self.nft
            .get_or_init(|| NftApi::new(self.context(NftApi::<C>::PREFIX)))
    }

    /// Transaction endpoints
    pub fn transaction(&self) -> &TransactionApi<C> {
        self.transaction
            .get_or_init(|| TransactionApi::new(self.context(TransactionApi::<C>::PREFIX)))
    }

    /// Block endpoints
    pub fn block(&self) -> &BlockApi<C> {
        self.block
            .get_or_init(|| BlockApi::new(self.context(BlockApi::<C>::PREFIX)))
    }

    /// API usage monitoring
    pub fn monitoring(&self) -> &MonitoringApi<C> {
        self.monitoring
            .get_or_init(|| MonitoringApi::new(self.context(MonitoringApi::<C>::PREFIX)))
    }

    fn context(&self, prefix: &str) -> GroupContext<C> {
        GroupContext::new(
            Arc::clone(&self.client),
            &self.base_url,
            prefix,
            auth_headers(&self.api_key),
        )
    }
}

impl<C> fmt::Debug for SolscanApi<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolscanApi")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

/// Client for the legacy public API
pub struct PublicApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl PublicApi<HttpClient> {
    /// Create a client for the public API with default settings
    ///
    /// # Errors
    ///
    /// Returns `SolscanError::Config` if the key is empty or whitespace-only
    pub fn new(api_key: impl Into<String>) -> SolscanResult<Self> {
        Self::from_config(&SolscanConfig::new(ApiKey::new(api_key)?))
    }

    /// Create a client from configuration, using its public base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the request helper cannot be built
    pub fn from_config(config: &SolscanConfig) -> SolscanResult<Self> {
        let client = HttpClient::new(config.http_config())?;
        info!(
            base_url = %config.public_base_url,
            "Solscan public client configured"
        );
        Ok(Self::with_client(
            &config.api_key,
            config.public_base_url.clone(),
            client,
        ))
    }
}

impl<C: HttpGet> PublicApi<C> {
    /// Create a client over any request helper
    pub fn with_client(api_key: &ApiKey, base_url: impl Into<String>, client: C) -> Self {
        let base_url = normalize_base_url(base_url);
        Self {
            inner: GroupContext::new(Arc::new(client), &base_url, "", auth_headers(api_key)),
        }
    }

    /// Base URL of the public API
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Chain information
    pub async fn chain_info(&self) -> SolscanResult<Value> {
        self.inner.fetch("chaininfo", &[]).await
    }
}

impl<C> fmt::Debug for PublicApi<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicApi")
            .field("url", &self.inner.url())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolscanError;

    fn api() -> SolscanApi {
        SolscanApi::new("test-key").unwrap()
    }

    #[test]
    fn groups_resolve_against_the_base_url() {
        let api = api();

        assert_eq!(api.base_url(), PRO_API_BASE_URL);
        assert_eq!(api.account().url(), "https://pro-api.solscan.io/v2.0/account/");
        assert_eq!(api.token().url(), "https://pro-api.solscan.io/v2.0/token/");
        assert_eq!(api.nft().url(), "https://pro-api.solscan.io/v2.0/nft/");
        assert_eq!(
            api.transaction().url(),
            "https://pro-api.solscan.io/v2.0/transaction/"
        );
        assert_eq!(api.block().url(), "https://pro-api.solscan.io/v2.0/block/");
        assert_eq!(
            api.monitoring().url(),
            "https://pro-api.solscan.io/v2.0/monitor/"
        );
    }

    #[test]
    fn groups_are_built_once() {
        let api = api();

        assert!(std::ptr::eq(api.account(), api.account()));
        assert!(std::ptr::eq(api.nft(), api.nft()));
        assert!(std::ptr::eq(api.monitoring(), api.monitoring()));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            SolscanApi::new("").unwrap_err(),
            SolscanError::Config { .. }
        ));
        assert!(PublicApi::new(" ").is_err());
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = SolscanApi::with_client(
            ApiKey::new("key").unwrap(),
            "http://localhost:8080/v2.0",
            HttpClient::new(solscan_http::HttpConfig::default()).unwrap(),
        );
        assert_eq!(api.block().url(), "http://localhost:8080/v2.0/block/");
    }

    #[test]
    fn debug_hides_the_key() {
        let debug = format!("{:?}", SolscanApi::new("very-secret").unwrap());
        assert!(!debug.contains("very-secret"));

        let public = format!("{:?}", PublicApi::new("very-secret").unwrap());
        assert!(public.contains(PUBLIC_API_BASE_URL));
        assert!(!public.contains("very-secret"));
    }
}
