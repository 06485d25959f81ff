//! Wire types for the market chart endpoint (REST).

use crate::shared::serde_util::timestamp_ms;
use crate::shared::{AssetId, Currency, Window};
use serde::{Deserialize, Serialize};

/// A raw `[timestamp_ms, value]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePair(
    #[serde(deserialize_with = "timestamp_ms::deserialize")] pub i64,
    pub f64,
);

impl SamplePair {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Raw response from `/coins/{id}/market_chart`.
///
/// `prices` and `total_volumes` are ascending by timestamp and usually, but
/// not always, the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<SamplePair>,
    #[serde(default)]
    pub total_volumes: Vec<SamplePair>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub market_caps: Vec<SamplePair>,
}

/// Query for one asset's history.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketChartQuery {
    pub asset: AssetId,
    pub vs_currency: Currency,
    pub window: Window,
}

impl MarketChartQuery {
    pub fn new(asset: AssetId, vs_currency: Currency, window: Window) -> Self {
        Self {
            asset,
            vs_currency,
            window,
        }
    }

    /// Path relative to the API base, with the asset id percent-encoded.
    pub fn to_path(&self) -> String {
        format!(
            "/coins/{}/market_chart?vs_currency={}&days={}",
            urlencoding::encode(self.asset.as_str()),
            self.vs_currency.as_str(),
            self.window.as_str()
        )
    }
}
