// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! API usage monitoring, served under `monitor/`

use serde_json::Value;
use solscan_http::{HttpClient, HttpGet};

use crate::{error::SolscanResult, group::GroupContext};

/// Monitoring endpoints, served under `monitor/`
#[derive(Debug)]
pub struct MonitoringApi<C = HttpClient> {
    inner: GroupContext<C>,
}

impl<C: HttpGet> MonitoringApi<C> {
    pub(crate) const PREFIX: &'static str = "monitor/";

    pub(crate) fn new(inner: GroupContext<C>) -> Self {
        Self { inner }
    }

    /// URL every path of this group is resolved against
    pub fn url(&self) -> &str {
        self.inner.url()
    }

    /// Usage of the API key
    pub async fn usage(&self) -> SolscanResult<Value> {
        self.inner.fetch("usage", &[]).await
    }
}
