//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). No retries and, unless configured, no request
//! timeout: a stalled upstream stalls the call until it settles.

use crate::domain::market::wire::{AssetResponse, MarketsQuery};
use crate::domain::price_history::wire::{MarketChartQuery, MarketChartResponse};
use crate::error::HttpError;
use crate::source::MarketDataSource;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Debug, Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, None)
    }

    /// `timeout` is ignored on wasm32, where the browser owns request lifetimes.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self, query: &MarketsQuery) -> Result<Vec<AssetResponse>, HttpError> {
        let url = format!("{}/coins/markets?{}", self.base_url, query.to_query_string());
        self.get(&url).await
    }

    // ── Market chart ─────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        query: &MarketChartQuery,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!("{}{}", self.base_url, query.to_path());
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let body_text = resp.text().await.unwrap_or_default();
        Err(HttpError::from_status(status.as_u16(), body_text))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataSource for CoinGeckoHttp {
    async fn markets(&self, query: &MarketsQuery) -> Result<Vec<AssetResponse>, HttpError> {
        self.get_markets(query).await
    }

    async fn market_chart(
        &self,
        query: &MarketChartQuery,
    ) -> Result<MarketChartResponse, HttpError> {
        self.get_market_chart(query).await
    }
}
