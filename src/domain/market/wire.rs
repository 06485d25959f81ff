//! Wire types for the top-N markets endpoint (REST).

use crate::shared::Currency;
use serde::{Deserialize, Serialize};

/// Raw asset entry from `/coins/markets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
}

/// Sort order for the top-N snapshot.
pub const ORDER_MARKET_CAP_DESC: &str = "market_cap_desc";

/// Query for one page of the markets endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsQuery {
    pub vs_currency: Currency,
    pub order: &'static str,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
    /// Extra change windows to include (`24h`, `7d`, ...).
    pub price_change_percentage: Vec<String>,
}

impl MarketsQuery {
    /// Top `n` assets by market cap with 24h/7d changes and no sparkline.
    pub fn top(vs_currency: Currency, n: u32) -> Self {
        Self {
            vs_currency,
            order: ORDER_MARKET_CAP_DESC,
            per_page: n,
            page: 1,
            sparkline: false,
            price_change_percentage: vec!["24h".to_string(), "7d".to_string()],
        }
    }

    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("vs_currency={}", self.vs_currency.as_str()),
            format!("order={}", self.order),
            format!("per_page={}", self.per_page),
            format!("page={}", self.page),
            format!("sparkline={}", self.sparkline),
        ];
        if !self.price_change_percentage.is_empty() {
            params.push(format!(
                "price_change_percentage={}",
                self.price_change_percentage.join(",")
            ));
        }
        params.join("&")
    }
}
