//! Data source abstraction for the market data API.
//!
//! [`MarketDataSource`] is the seam between the dashboard logic and the
//! transport. The HTTP implementation lives in [`crate::http`]; tests and
//! embedders can supply their own (recorded fixtures, alternative vendors).
//!
//! # Example
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use coinboard::domain::market::wire::{AssetResponse, MarketsQuery};
//! use coinboard::domain::price_history::wire::{MarketChartQuery, MarketChartResponse};
//! use coinboard::error::HttpError;
//! use coinboard::source::MarketDataSource;
//!
//! struct Fixture;
//!
//! #[async_trait]
//! impl MarketDataSource for Fixture {
//!     async fn markets(&self, _q: &MarketsQuery) -> Result<Vec<AssetResponse>, HttpError> {
//!         Ok(vec![])
//!     }
//!     async fn market_chart(&self, _q: &MarketChartQuery) -> Result<MarketChartResponse, HttpError> {
//!         Ok(MarketChartResponse::default())
//!     }
//! }
//! ```

use crate::domain::market::wire::{AssetResponse, MarketsQuery};
use crate::domain::price_history::wire::{MarketChartQuery, MarketChartResponse};
use crate::error::HttpError;
use async_trait::async_trait;

/// Fetches raw market data. Implementations return wire types; conversion to
/// domain types happens in the sub-clients.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataSource: Send + Sync {
    /// One page of assets ordered as requested.
    async fn markets(&self, query: &MarketsQuery) -> Result<Vec<AssetResponse>, HttpError>;

    /// Price and volume history for one asset.
    async fn market_chart(
        &self,
        query: &MarketChartQuery,
    ) -> Result<MarketChartResponse, HttpError>;
}
