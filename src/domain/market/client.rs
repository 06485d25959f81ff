//! Markets sub-client — top-N snapshot.

use crate::client::DashboardClient;
use crate::domain::market::{snapshot_from_wire, AssetSnapshot};
use crate::domain::market::wire::MarketsQuery;
use crate::error::DashboardError;
use crate::shared::Currency;

/// Sub-client for market snapshot operations.
pub struct Markets<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Markets<'a> {
    /// Top assets by descending market cap, in the order the API returned them.
    ///
    /// Transport and status failures surface as
    /// [`DashboardError::SnapshotFetch`], malformed payloads as
    /// [`DashboardError::SnapshotInvalid`].
    pub async fn top(&self, currency: Currency) -> Result<Vec<AssetSnapshot>, DashboardError> {
        let query = MarketsQuery::top(currency, self.client.top_n);
        let resp = self
            .client
            .source
            .markets(&query)
            .await
            .map_err(DashboardError::SnapshotFetch)?;
        snapshot_from_wire(resp).map_err(DashboardError::SnapshotInvalid)
    }
}
