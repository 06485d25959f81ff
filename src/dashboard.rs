//! `Dashboard` — drives [`DashboardState`] with a [`DashboardClient`].
//!
//! The UI layer calls the async actions below and reads state snapshots in
//! between. Network calls run without holding the state lock; each completion
//! is applied with the ticket it was issued with, so stale responses from
//! overlapping fetches are dropped rather than overwriting newer data.
//!
//! Actions that fetch a snapshot (`mount`, `refresh`, `select_currency`)
//! return once the refresh indicator has been reset, at least the configured
//! indicator duration after the snapshot settled. The data itself is applied
//! as soon as it arrives; spawn the action to keep the caller free.

use crate::client::DashboardClient;
use crate::domain::dashboard::{DashboardState, FetchRequest, Filters, Ticket};
use crate::error::DashboardError;
use crate::shared::{AssetId, Currency, Window};

use async_lock::RwLock;
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;

/// Minimum time the refresh indicator stays on after a snapshot settles.
pub const REFRESH_INDICATOR_MIN: Duration = Duration::from_millis(500);

/// Async controller over one dashboard instance.
#[derive(Clone)]
pub struct Dashboard {
    client: DashboardClient,
    state: Arc<RwLock<DashboardState>>,
    refresh_indicator: Duration,
}

impl Dashboard {
    pub fn new(client: DashboardClient) -> Self {
        Self::with_filters(client, Filters::default())
    }

    pub fn with_filters(client: DashboardClient, filters: Filters) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(DashboardState::with_filters(filters))),
            refresh_indicator: REFRESH_INDICATOR_MIN,
        }
    }

    /// Override how long the refresh indicator stays on after settlement.
    pub fn refresh_indicator(mut self, duration: Duration) -> Self {
        self.refresh_indicator = duration;
        self
    }

    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    /// Shared handle to the live state.
    pub fn state(&self) -> Arc<RwLock<DashboardState>> {
        self.state.clone()
    }

    /// Point-in-time copy of the state.
    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    // ── Actions ──────────────────────────────────────────────────────────

    /// Initial load: snapshot and history for the current filters.
    /// Returns after the refresh indicator reset.
    pub async fn mount(&self) {
        let requests = self.state.write().await.mount();
        self.run(requests).await;
    }

    /// User-initiated refresh (also the retry action of the error view).
    /// A no-op while a refresh is in progress, unless the error view is up.
    /// Returns after the refresh indicator reset.
    pub async fn refresh(&self) {
        let request = self.state.write().await.request_refresh();
        if let Some(request) = request {
            self.run(vec![request]).await;
        }
    }

    /// Refetches snapshot and history. Returns after the refresh indicator reset.
    pub async fn select_currency(&self, currency: Currency) {
        let requests = self.state.write().await.set_currency(currency);
        self.run(requests).await;
    }

    pub async fn select_asset(&self, asset: AssetId) -> Result<(), DashboardError> {
        let request = self.state.write().await.set_asset(asset)?;
        if let Some(request) = request {
            self.run(vec![request]).await;
        }
        Ok(())
    }

    pub async fn select_window(&self, window: Window) {
        let request = self.state.write().await.set_window(window);
        if let Some(request) = request {
            self.run(vec![request]).await;
        }
    }

    // ── Execution ────────────────────────────────────────────────────────

    /// Run fetches concurrently and apply each completion as it settles.
    pub async fn run(&self, requests: Vec<FetchRequest>) {
        join_all(requests.into_iter().map(|r| self.execute(r))).await;
    }

    async fn execute(&self, request: FetchRequest) {
        match request {
            FetchRequest::Snapshot { ticket, currency } => {
                let result = self.client.markets().top(currency).await;
                self.state.write().await.apply_snapshot(ticket, result);
                self.settle_refresh(ticket).await;
            }
            FetchRequest::History {
                ticket,
                asset,
                window,
                currency,
            } => {
                let result = self.client.price_history().get(&asset, window, currency).await;
                self.state.write().await.apply_history(ticket, result);
            }
        }
    }

    async fn settle_refresh(&self, ticket: Ticket) {
        if !self.refresh_indicator.is_zero() {
            futures_timer::Delay::new(self.refresh_indicator).await;
        }
        self.state.write().await.finish_refresh(ticket);
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("client", &self.client)
            .field("refresh_indicator", &self.refresh_indicator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::Status;
    use crate::domain::market::wire::{AssetResponse, MarketsQuery};
    use crate::domain::price_history::wire::{MarketChartQuery, MarketChartResponse};
    use crate::error::HttpError;
    use crate::source::MarketDataSource;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl MarketDataSource for Offline {
        async fn markets(&self, _query: &MarketsQuery) -> Result<Vec<AssetResponse>, HttpError> {
            Err(HttpError::ServerError {
                status: 503,
                body: String::new(),
            })
        }

        async fn market_chart(
            &self,
            _query: &MarketChartQuery,
        ) -> Result<MarketChartResponse, HttpError> {
            Err(HttpError::RateLimited)
        }
    }

    fn offline() -> Dashboard {
        let client = DashboardClient::builder()
            .source(Arc::new(Offline))
            .build()
            .unwrap();
        Dashboard::new(client).refresh_indicator(Duration::ZERO)
    }

    #[test]
    fn test_mount_offline_ends_in_error() {
        let dash = offline();
        tokio_test::block_on(dash.mount());

        let state = tokio_test::block_on(dash.snapshot());
        assert_eq!(state.status(), Status::Error);
        assert!(!state.is_refreshing());
        assert!(state.series().is_empty());
    }

    #[test]
    fn test_select_empty_asset_rejected() {
        let dash = offline();
        let result = tokio_test::block_on(dash.select_asset(AssetId::new("  ")));
        assert!(matches!(result, Err(DashboardError::Validation(_))));
    }

    #[test]
    fn test_default_indicator_duration() {
        let client = DashboardClient::builder()
            .source(Arc::new(Offline))
            .build()
            .unwrap();
        let dash = Dashboard::new(client);
        assert_eq!(dash.refresh_indicator, REFRESH_INDICATOR_MIN);
    }
}
