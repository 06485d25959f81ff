//! Dashboard state container — app-owned, crate-provided transition logic.
//!
//! Filter setters and refresh requests hand back [`FetchRequest`]s; the caller
//! performs them and reports each completion with its ticket. Completions
//! carrying a ticket older than the latest one issued for that fetch kind are
//! discarded, so an overlapping slow response cannot overwrite newer state.

use super::{FetchRequest, Filters, Status, Ticket, View};
use crate::domain::market::{self, AssetSnapshot, MarketShare, StatCard};
use crate::domain::price_history::HistorySeries;
use crate::error::{DashboardError, SNAPSHOT_ERROR_MESSAGE};
use crate::shared::{AssetId, Currency, Window};

/// Everything the dashboard renders from.
///
/// The app owns one instance per mounted dashboard. Snapshot failures move the
/// status to [`Status::Error`] but keep the last good asset list; history
/// failures are logged and leave the current series untouched.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    assets: Vec<AssetSnapshot>,
    series: HistorySeries,
    filters: Filters,
    status: Status,
    error: Option<String>,
    refreshing: bool,
    snapshot_ticket: Ticket,
    history_ticket: Ticket,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: Filters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn assets(&self) -> &[AssetSnapshot] {
        &self.assets
    }

    pub fn series(&self) -> &HistorySeries {
        &self.series
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn selected_asset(&self) -> Option<&AssetSnapshot> {
        self.assets.iter().find(|a| a.id == self.filters.asset)
    }

    pub fn view(&self) -> View {
        match self.status {
            Status::Loading if self.assets.is_empty() => View::Loading,
            Status::Error => View::Error(
                self.error
                    .clone()
                    .unwrap_or_else(|| SNAPSHOT_ERROR_MESSAGE.to_string()),
            ),
            _ => View::Ready,
        }
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        market::stat_cards(&self.assets, &self.filters.asset)
    }

    pub fn market_cap_distribution(&self) -> Vec<MarketShare> {
        market::market_cap_distribution(&self.assets)
    }

    // ── Requests ─────────────────────────────────────────────────────────

    /// Initial fetches: the snapshot plus the history for the default filters.
    pub fn mount(&mut self) -> Vec<FetchRequest> {
        let mut requests = vec![self.issue_snapshot()];
        requests.extend(self.issue_history());
        requests
    }

    /// User-initiated refresh. Ignored while a refresh is already in progress,
    /// except from the error view, whose retry always goes through.
    pub fn request_refresh(&mut self) -> Option<FetchRequest> {
        if self.refreshing && self.status != Status::Error {
            return None;
        }
        Some(self.issue_snapshot())
    }

    /// A currency change refetches both the snapshot and the history.
    pub fn set_currency(&mut self, currency: Currency) -> Vec<FetchRequest> {
        if self.filters.currency == currency {
            return Vec::new();
        }
        self.filters.currency = currency;
        let mut requests = vec![self.issue_snapshot()];
        requests.extend(self.issue_history());
        requests
    }

    /// Select an asset. Empty ids are rejected, as are ids missing from the
    /// current snapshot once one has been received.
    pub fn set_asset(&mut self, asset: AssetId) -> Result<Option<FetchRequest>, DashboardError> {
        if asset.is_empty() {
            return Err(DashboardError::Validation("Asset id must not be empty".into()));
        }
        if !self.assets.is_empty() && !self.assets.iter().any(|a| a.id == asset) {
            return Err(DashboardError::Validation(format!(
                "Asset {asset} is not in the current snapshot"
            )));
        }
        if self.filters.asset == asset {
            return Ok(None);
        }
        self.filters.asset = asset;
        Ok(self.issue_history())
    }

    pub fn set_window(&mut self, window: Window) -> Option<FetchRequest> {
        if self.filters.window == window {
            return None;
        }
        self.filters.window = window;
        self.issue_history()
    }

    fn issue_snapshot(&mut self) -> FetchRequest {
        self.snapshot_ticket = self.snapshot_ticket.next();
        self.refreshing = true;
        FetchRequest::Snapshot {
            ticket: self.snapshot_ticket,
            currency: self.filters.currency,
        }
    }

    fn issue_history(&mut self) -> Option<FetchRequest> {
        if self.filters.asset.is_empty() {
            return None;
        }
        self.history_ticket = self.history_ticket.next();
        Some(FetchRequest::History {
            ticket: self.history_ticket,
            asset: self.filters.asset.clone(),
            window: self.filters.window,
            currency: self.filters.currency,
        })
    }

    // ── Completions ──────────────────────────────────────────────────────

    /// Apply a snapshot completion. Returns `false` if the ticket is stale.
    pub fn apply_snapshot(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<AssetSnapshot>, DashboardError>,
    ) -> bool {
        if ticket != self.snapshot_ticket {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.snapshot_ticket.value(),
                "Discarding stale snapshot"
            );
            return false;
        }

        match result {
            Ok(assets) => {
                tracing::info!(count = assets.len(), currency = %self.filters.currency, "Snapshot applied");
                self.assets = assets;
                self.status = Status::Ready;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error fetching market snapshot");
                self.status = Status::Error;
                self.error = Some(SNAPSHOT_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    /// Apply a history completion. Returns `false` if the ticket is stale.
    /// Failures never touch the status.
    pub fn apply_history(
        &mut self,
        ticket: Ticket,
        result: Result<HistorySeries, DashboardError>,
    ) -> bool {
        if ticket != self.history_ticket {
            tracing::debug!(
                ticket = ticket.value(),
                latest = self.history_ticket.value(),
                "Discarding stale history"
            );
            return false;
        }

        match result {
            Ok(series) => {
                tracing::debug!(points = series.len(), asset = %self.filters.asset, "History applied");
                self.series = series;
            }
            Err(err) => {
                tracing::warn!(error = %err, asset = %self.filters.asset, "Error fetching historical data");
            }
        }
        true
    }

    /// Clear the refresh indicator for `ticket`, unless a newer snapshot fetch
    /// has been issued since.
    pub fn finish_refresh(&mut self, ticket: Ticket) -> bool {
        if ticket != self.snapshot_ticket {
            return false;
        }
        self.refreshing = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::SeriesSample;
    use crate::error::HttpError;
    use rust_decimal::Decimal;

    fn asset(id: &str, price: i64) -> AssetSnapshot {
        AssetSnapshot {
            id: AssetId::from(id),
            symbol: id[..3].to_string(),
            name: id.to_string(),
            image: "x".to_string(),
            current_price: Decimal::from(price),
            price_change_24h: Some(Decimal::new(25, 1)),
            price_change_7d: None,
            market_cap: Decimal::from(1_000_000_000),
        }
    }

    fn series(n: usize) -> HistorySeries {
        HistorySeries::new(
            (0..n)
                .map(|i| SeriesSample {
                    time: i as i64,
                    date: String::new(),
                    price: Decimal::from(i as i64),
                    volume: Decimal::ZERO,
                })
                .collect(),
        )
    }

    fn snapshot_ticket(requests: &[FetchRequest]) -> Ticket {
        requests
            .iter()
            .find(|r| r.is_snapshot())
            .map(FetchRequest::ticket)
            .unwrap()
    }

    fn history_ticket(requests: &[FetchRequest]) -> Ticket {
        requests
            .iter()
            .find(|r| !r.is_snapshot())
            .map(FetchRequest::ticket)
            .unwrap()
    }

    fn snapshot_err() -> DashboardError {
        DashboardError::SnapshotFetch(HttpError::ServerError {
            status: 500,
            body: String::new(),
        })
    }

    #[test]
    fn test_initial_state_is_loading() {
        let mut state = DashboardState::new();
        let requests = state.mount();
        assert_eq!(requests.len(), 2);
        assert_eq!(state.status(), Status::Loading);
        assert_eq!(state.view(), View::Loading);
        assert!(state.is_refreshing());
        assert!(state.assets().is_empty());
        assert!(state.series().is_empty());
    }

    #[test]
    fn test_loading_to_ready() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        assert!(state.apply_snapshot(t, Ok(vec![asset("bitcoin", 50000)])));
        assert_eq!(state.status(), Status::Ready);
        assert_eq!(state.view(), View::Ready);
        assert_eq!(state.assets()[0].current_price, Decimal::from(50000));
        assert_eq!(state.selected_asset().unwrap().id.as_str(), "bitcoin");
    }

    #[test]
    fn test_loading_to_error_uses_fixed_message() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        state.apply_snapshot(t, Err(snapshot_err()));
        assert_eq!(state.status(), Status::Error);
        assert_eq!(state.error_message(), Some(SNAPSHOT_ERROR_MESSAGE));
        assert_eq!(state.view(), View::Error(SNAPSHOT_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_assets() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        state.apply_snapshot(t, Ok(vec![asset("bitcoin", 50000)]));
        state.finish_refresh(t);

        let t2 = state.request_refresh().unwrap().ticket();
        state.apply_snapshot(t2, Err(snapshot_err()));
        assert_eq!(state.status(), Status::Error);
        assert_eq!(state.assets().len(), 1);
        assert_eq!(state.assets()[0].current_price, Decimal::from(50000));

        state.finish_refresh(t2);
        let t3 = state.request_refresh().unwrap().ticket();
        state.apply_snapshot(t3, Ok(vec![asset("bitcoin", 51000)]));
        assert_eq!(state.status(), Status::Ready);
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_refresh_ignored_while_in_progress() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        assert!(state.request_refresh().is_none());
        state.apply_snapshot(t, Ok(vec![]));
        assert!(state.is_refreshing());
        assert!(state.finish_refresh(t));
        assert!(!state.is_refreshing());
        assert!(state.request_refresh().is_some());
    }

    #[test]
    fn test_retry_from_error_view_not_gated_by_indicator() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        state.apply_snapshot(t, Err(snapshot_err()));
        assert!(state.is_refreshing());

        let retry = state.request_refresh().unwrap().ticket();
        assert!(retry > t);
        assert!(!state.finish_refresh(t));
        assert!(state.is_refreshing());

        state.apply_snapshot(retry, Ok(vec![asset("bitcoin", 50000)]));
        assert_eq!(state.status(), Status::Ready);
        assert!(state.finish_refresh(retry));
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_stale_snapshot_discarded() {
        let mut state = DashboardState::new();
        let first = snapshot_ticket(&state.mount());
        let second = snapshot_ticket(&state.set_currency(Currency::Eur));

        assert!(state.apply_snapshot(second, Ok(vec![asset("bitcoin", 45000)])));
        assert!(!state.apply_snapshot(first, Ok(vec![asset("bitcoin", 50000)])));
        assert_eq!(state.assets()[0].current_price, Decimal::from(45000));

        // The older fetch settling does not clear the newer one's indicator.
        assert!(!state.finish_refresh(first));
        assert!(state.is_refreshing());
        assert!(state.finish_refresh(second));
    }

    #[test]
    fn test_history_failure_keeps_series_and_status() {
        let mut state = DashboardState::new();
        let requests = state.mount();
        let st = snapshot_ticket(&requests);
        let ht = history_ticket(&requests);
        state.apply_snapshot(st, Ok(vec![asset("bitcoin", 1), asset("ethereum", 2)]));
        state.apply_history(ht, Ok(series(7)));

        let ht2 = state.set_window(Window::Day30).unwrap().ticket();
        state.apply_history(
            ht2,
            Err(DashboardError::HistoryFetch(HttpError::RateLimited)),
        );
        assert_eq!(state.series().len(), 7);
        assert_eq!(state.status(), Status::Ready);
    }

    #[test]
    fn test_history_does_not_leave_loading() {
        let mut state = DashboardState::new();
        let ht = history_ticket(&state.mount());
        state.apply_history(ht, Ok(series(3)));
        assert_eq!(state.status(), Status::Loading);
        assert_eq!(state.series().len(), 3);
    }

    #[test]
    fn test_stale_history_discarded() {
        let mut state = DashboardState::new();
        let first = history_ticket(&state.mount());
        let second = state.set_window(Window::Day365).unwrap().ticket();
        assert!(state.apply_history(second, Ok(series(53))));
        assert!(!state.apply_history(first, Ok(series(7))));
        assert_eq!(state.series().len(), 53);
    }

    #[test]
    fn test_unchanged_filters_issue_nothing() {
        let mut state = DashboardState::new();
        assert!(state.set_currency(Currency::Usd).is_empty());
        assert!(state.set_window(Window::Day7).is_none());
        assert!(state.set_asset(AssetId::from("bitcoin")).unwrap().is_none());
    }

    #[test]
    fn test_currency_change_refetches_both() {
        let mut state = DashboardState::new();
        let requests = state.set_currency(Currency::Mxn);
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| match r {
            FetchRequest::Snapshot { currency, .. } => *currency == Currency::Mxn,
            FetchRequest::History { currency, .. } => *currency == Currency::Mxn,
        }));
        assert_eq!(state.status(), Status::Loading);
    }

    #[test]
    fn test_set_asset_validation() {
        let mut state = DashboardState::new();
        assert!(state.set_asset(AssetId::from("")).is_err());
        // No snapshot yet: any non-empty id is accepted.
        assert!(state.set_asset(AssetId::from("solana")).unwrap().is_some());

        let t = snapshot_ticket(&state.mount());
        state.apply_snapshot(t, Ok(vec![asset("bitcoin", 1), asset("ethereum", 2)]));
        assert!(state.set_asset(AssetId::from("dogecoin")).is_err());
        match state.set_asset(AssetId::from("ethereum")).unwrap() {
            Some(FetchRequest::History { asset, window, .. }) => {
                assert_eq!(asset.as_str(), "ethereum");
                assert_eq!(window, Window::Day7);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(state.stat_cards()[1].selected);
    }

    #[test]
    fn test_derived_views() {
        let mut state = DashboardState::new();
        let t = snapshot_ticket(&state.mount());
        state.apply_snapshot(t, Ok(vec![asset("bitcoin", 1), asset("ethereum", 2)]));
        assert_eq!(state.stat_cards().len(), 2);
        let shares = state.market_cap_distribution();
        assert_eq!(shares[0].percent, Decimal::from(50));
    }
}
