// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT endpoints
//!
//! News, marketplace activities and collection listings, all served under
//! `nft/`. Activities carry the one cross-field rule of the API: a `price`
//! range is only meaningful together with a `currency_token`.

use serde::Deserialize;
use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{
    error::{SolscanError, SolscanResult},
    group::GroupContext,
    query::{Endpoint, Filter, first_page, some_first_page},
};

const DEFAULT_NEWS_FILTER: &str = "created_time";

fn default_news_filter() -> String {
    DEFAULT_NEWS_FILTER.to_string()
}

/// Request for [`NftApi::news`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewsRequest {
    /// News filter, `created_time` by default
    #[serde(default = "default_news_filter")]
    pub filter: String,
    /// Items per page
    pub page_size: Option<u64>,
    /// Page number, 1 by default
    #[serde(default = "some_first_page")]
    pub page: Option<u64>,
}

impl Default for NewsRequest {
    fn default() -> Self {
        Self {
            filter: default_news_filter(),
            page_size: None,
            page: some_first_page(),
        }
    }
}

impl Endpoint for NewsRequest {
    const PATH: &'static str = "news";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("filter", &self.filter),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("page", self.page.as_ref()),
        ]
    }
}

/// Request for [`NftApi::activities`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivitiesRequest {
    /// Page number, 1 by default
    #[serde(default = "first_page")]
    pub page: u64,
    /// Activity types, e.g. `ACTIVITY_NFT_SOLD`
    pub activity_type: Option<Vec<String>>,
    /// Only activities from this address
    pub from: Option<String>,
    /// Only activities to this address
    pub to: Option<String>,
    /// Token the price is expressed in
    pub currency_token: Option<String>,
    /// `[min, max]` price range; requires `currency_token`
    pub price: Option<Vec<u64>>,
    /// Marketplace program addresses
    pub source: Option<Vec<String>>,
    /// Collection address
    pub collection: Option<String>,
    /// NFT token address
    pub token: Option<String>,
    /// `[start, end]` in unix seconds
    pub block_time: Option<Vec<u64>>,
    /// Items per page
    pub page_size: Option<u64>,
}

impl Default for ActivitiesRequest {
    fn default() -> Self {
        Self {
            page: first_page(),
            activity_type: None,
            from: None,
            to: None,
            currency_token: None,
            price: None,
            source: None,
            collection: None,
            token: None,
            block_time: None,
            page_size: None,
        }
    }
}

impl Endpoint for ActivitiesRequest {
    const PATH: &'static str = "activities";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("page", &self.page),
            Filter::optional("activity_type", self.activity_type.as_ref()),
            Filter::optional("from", self.from.as_ref()),
            Filter::optional("to", self.to.as_ref()),
            Filter::optional("currency_token", self.currency_token.as_ref()),
            Filter::optional("price", self.price.as_ref()),
            Filter::optional("source", self.source.as_ref()),
            Filter::optional("collection", self.collection.as_ref()),
            Filter::optional("token", self.token.as_ref()),
            Filter::optional("block_time", self.block_time.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
        ]
    }

    fn check(&self) -> SolscanResult<()> {
        if self.price.is_some() && self.currency_token.as_deref().is_none_or(str::is_empty) {
            return Err(SolscanError::precondition(
                "specify currency_token before price",
            ));
        }
        Ok(())
    }
}

/// Request for [`NftApi::collection_lists`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionListsRequest {
    /// Look-back range in days, 1 by default
    #[serde(default = "first_page")]
    pub range: u64,
    /// Only this collection
    pub collection: Option<String>,
    /// Page number, 1 by default
    #[serde(default = "some_first_page")]
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
    /// Sort field, e.g. `items` or `volumes`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

impl Default for CollectionListsRequest {
    fn default() -> Self {
        Self {
            range: 1,
            collection: None,
            page: some_first_page(),
            page_size: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl Endpoint for CollectionListsRequest {
    const PATH: &'static str = "collection/lists";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("range", &self.range),
            Filter::optional("collection", self.collection.as_ref()),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
            Filter::optional("sort_order", self.sort_order.as_ref()),
        ]
    }
}

/// Request for [`NftApi::collection_items`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionItemsRequest {
    /// Collection address
    pub collection: String,
    /// Page number, 1 by default
    #[serde(default = "some_first_page")]
    pub page: Option<u64>,
    /// Items per page
    pub page_size: Option<u64>,
    /// Sort field, e.g. `last_trade` or `listing_price`
    pub sort_by: Option<String>,
}

impl CollectionItemsRequest {
    /// Request the first page of items in `collection`
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }
}

impl Default for CollectionItemsRequest {
    fn default() -> Self {
        Self {
            collection: String::new(),
            page: some_first_page(),
            page_size: None,
            sort_by: None,
        }
    }
}

impl Endpoint for CollectionItemsRequest {
    const PATH: &'static str = "collection/items";

    fn filters(&self) -> Vec<Filter> {
        vec![
            Filter::required("collection", &self.collection),
            Filter::optional("page", self.page.as_ref()),
            Filter::optional("page_size", self.page_size.as_ref()),
            Filter::optional("sort_by", self.sort_by.as_ref()),
        ]
    }
}

/// NFT endpoints, served under `nft/`
#[derive(Debug)]
pub struct NftApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> NftApi<C> {
    pub(crate) const PREFIX: &'static str = "nft/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Latest NFT news
    pub async fn news(&self, request: &NewsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// NFT marketplace activities
    ///
    /// # Errors
    ///
    /// Returns [`SolscanError::Precondition`] without sending a request when
    /// `price` is set and `currency_token` is not
    pub async fn activities(&self, request: &ActivitiesRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// NFT collections ranked over a time range
    pub async fn collection_lists(&self, request: &CollectionListsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }

    /// Items of an NFT collection
    pub async fn collection_items(&self, request: &CollectionItemsRequest) -> SolscanResult<Value> {
        self.inner.get(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn news_defaults() {
        assert_eq!(
            NewsRequest::default().query().unwrap().to_string(),
            "filter=created_time&page=1"
        );
    }

    #[test]
    fn price_requires_currency_token() {
        let request = ActivitiesRequest {
            price: Some(vec![1, 10]),
            ..Default::default()
        };

        match request.query().unwrap_err() {
            SolscanError::Precondition { message } => assert!(message.contains("currency_token")),
            other => panic!("Expected Precondition error, got: {other:?}"),
        }

        let empty_currency = ActivitiesRequest {
            currency_token: Some(String::new()),
            price: Some(vec![1, 10]),
            ..Default::default()
        };
        assert!(matches!(
            empty_currency.query().unwrap_err(),
            SolscanError::Precondition { .. }
        ));
    }

    #[test]
    fn price_with_currency_token() {
        let request = ActivitiesRequest {
            currency_token: Some("So11111111111111111111111111111111111111112".to_string()),
            price: Some(vec![1, 10]),
            page_size: Some(20),
            ..Default::default()
        };

        assert_eq!(
            request.query().unwrap().to_string(),
            "page=1&currency_token=So11111111111111111111111111111111111111112\
             &price[]=1&price[]=10&page_size=20"
        );
    }

    #[test]
    fn activities_from_json_checks_kinds_before_preconditions() {
        let error = ActivitiesRequest::from_json(json!({"price": ["cheap"]})).unwrap_err();
        assert!(matches!(error, SolscanError::TypeMismatch { .. }));

        let request = ActivitiesRequest::from_json(json!({"price": [1, 2]})).unwrap();
        assert!(matches!(
            request.query().unwrap_err(),
            SolscanError::Precondition { .. }
        ));
    }

    #[test]
    fn null_fields_take_defaults() {
        let news = NewsRequest::from_json(json!({"filter": null, "page": null})).unwrap();
        assert_eq!(news, NewsRequest::default());

        let activities = ActivitiesRequest::from_json(json!({"page": null})).unwrap();
        assert_eq!(activities.query().unwrap().to_string(), "page=1");

        let lists = CollectionListsRequest::from_json(json!({"range": null})).unwrap();
        assert_eq!(lists.query().unwrap().to_string(), "range=1&page=1");
    }

    #[test]
    fn collection_lists_defaults() {
        let request = CollectionListsRequest {
            sort_by: Some("volumes".to_string()),
            ..Default::default()
        };

        assert_eq!(
            request.query().unwrap().to_string(),
            "range=1&page=1&sort_by=volumes"
        );
    }

    #[test]
    fn collection_items_page_can_be_dropped() {
        let request = CollectionItemsRequest {
            page: None,
            ..CollectionItemsRequest::new("Coll1")
        };

        assert_eq!(request.query().unwrap().to_string(), "collection=Coll1");
    }
}
