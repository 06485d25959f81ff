//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared data source, and accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::error::DashboardError;
use crate::source::MarketDataSource;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// Number of assets in a snapshot.
pub const DEFAULT_TOP_N: u32 = 5;

/// The primary entry point for market data.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.price_history()`.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) source: Arc<dyn MarketDataSource>,
    pub(crate) top_n: u32,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn top_n(&self) -> u32 {
        self.top_n
    }
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("top_n", &self.top_n)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    top_n: u32,
    source: Option<Arc<dyn MarketDataSource>>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            top_n: DEFAULT_TOP_N,
            source: None,
        }
    }
}

impl DashboardClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout for the HTTP transport. Unset by default.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn top_n(mut self, n: u32) -> Self {
        self.top_n = n;
        self
    }

    /// Use a custom data source instead of the HTTP transport.
    pub fn source(mut self, source: Arc<dyn MarketDataSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<DashboardClient, DashboardError> {
        if self.top_n == 0 {
            return Err(DashboardError::Validation("top_n must be at least 1".into()));
        }
        let source = match self.source {
            Some(source) => source,
            None => self.default_source()?,
        };
        Ok(DashboardClient {
            source,
            top_n: self.top_n,
        })
    }

    #[cfg(feature = "http")]
    fn default_source(&self) -> Result<Arc<dyn MarketDataSource>, DashboardError> {
        let http = crate::http::CoinGeckoHttp::with_timeout(&self.base_url, self.timeout)?;
        Ok(Arc::new(http))
    }

    #[cfg(not(feature = "http"))]
    fn default_source(&self) -> Result<Arc<dyn MarketDataSource>, DashboardError> {
        Err(DashboardError::Validation(format!(
            "No data source configured for {} (enable the `http` feature or call `source`)",
            self.base_url
        )))
    }
}
