//! Price history sub-client — market chart queries.

use crate::client::DashboardClient;
use crate::domain::price_history::wire::{MarketChartQuery, MarketChartResponse};
use crate::domain::price_history::{transform, HistorySeries};
use crate::error::DashboardError;
use crate::shared::{AssetId, Currency, Window};

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Raw price/volume pairs for `asset` over `window`.
    pub async fn raw(
        &self,
        asset: &AssetId,
        window: Window,
        currency: Currency,
    ) -> Result<MarketChartResponse, DashboardError> {
        if asset.is_empty() {
            return Err(DashboardError::Validation("Asset id must not be empty".into()));
        }
        let query = MarketChartQuery::new(asset.clone(), currency, window);
        self.client
            .source
            .market_chart(&query)
            .await
            .map_err(DashboardError::HistoryFetch)
    }

    /// Chart-ready series for `asset` over `window`, downsampled per window.
    pub async fn get(
        &self,
        asset: &AssetId,
        window: Window,
        currency: Currency,
    ) -> Result<HistorySeries, DashboardError> {
        let resp = self.raw(asset, window, currency).await?;
        Ok(transform(&resp.prices, &resp.total_volumes, window))
    }
}
