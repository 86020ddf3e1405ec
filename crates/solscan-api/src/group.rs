// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! State shared by the methods of one endpoint group

use core::fmt;
use std::sync::Arc;

use serde_json::Value;
use solscan_http::{Headers, HttpGet};
use tracing::debug;

use crate::{
    error::SolscanResult,
    query::{Endpoint, Filter, Query},
};

/// URL prefix, auth headers and request helper of an endpoint group
pub(crate) struct GroupContext<C> {
    client: Arc<C>,
    url: String,
    headers: Headers,
}

impl<C> GroupContext<C> {
    pub(crate) fn new(client: Arc<C>, base_url: &str, prefix: &str, headers: Headers) -> Self {
        Self {
            client,
            url: format!("{base_url}{prefix}"),
            headers,
        }
    }

    /// URL every path of this group is resolved against
    pub(crate) fn url(&self) -> &str {
        &self.url
    }
}

impl<C: HttpGet> GroupContext<C> {
    /// Validate `request`, then GET its endpoint
    pub(crate) async fn get<E: Endpoint>(&self, request: &E) -> SolscanResult<Value> {
        let query = request.query()?;
        self.send(E::PATH, &query).await
    }

    /// GET `path` with a query built from `filters`
    pub(crate) async fn fetch(&self, path: &str, filters: &[Filter]) -> SolscanResult<Value> {
        let query = Query::build(filters)?;
        self.send(path, &query).await
    }

    async fn send(&self, path: &str, query: &Query) -> SolscanResult<Value> {
        let url = query.to_url(&format!("{}{path}", self.url));
        debug!(url, "calling Solscan endpoint");
        Ok(self.client.get_json(&url, &self.headers).await?)
    }
}

// Headers carry the API key and stay out of debug output.
impl<C> fmt::Debug for GroupContext<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupContext")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}
