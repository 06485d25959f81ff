//! Derived views over a snapshot: summary cards and market-cap distribution.

use super::AssetSnapshot;
use crate::shared::AssetId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of assets shown as summary cards.
pub const STAT_CARD_COUNT: usize = 4;

/// Direction of the 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Up only for a strictly positive change; flat or unknown counts as down.
    pub fn from_change(change: Option<&Decimal>) -> Self {
        match change {
            Some(c) if c.is_sign_positive() && !c.is_zero() => Trend::Up,
            _ => Trend::Down,
        }
    }
}

/// A summary card for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub id: AssetId,
    /// Upper-cased ticker.
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub change_24h: Option<Decimal>,
    pub trend: Trend,
    pub selected: bool,
}

/// One slice of the market-cap distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShare {
    pub id: AssetId,
    pub name: String,
    pub market_cap: Decimal,
    /// Share of the listed total, 0–100.
    pub percent: Decimal,
    /// Slice label, e.g. `Bit 60%`.
    pub label: String,
}

/// Cards for the first [`STAT_CARD_COUNT`] assets, in snapshot order.
pub fn stat_cards(assets: &[AssetSnapshot], selected: &AssetId) -> Vec<StatCard> {
    assets
        .iter()
        .take(STAT_CARD_COUNT)
        .map(|a| StatCard {
            id: a.id.clone(),
            symbol: a.symbol.to_uppercase(),
            name: a.name.clone(),
            image: a.image.clone(),
            price: a.current_price,
            change_24h: a.price_change_24h,
            trend: a.trend(),
            selected: &a.id == selected,
        })
        .collect()
}

/// Each asset's share of the combined market cap of the list.
pub fn market_cap_distribution(assets: &[AssetSnapshot]) -> Vec<MarketShare> {
    let total: Decimal = assets.iter().map(|a| a.market_cap).sum();

    assets
        .iter()
        .map(|a| {
            let percent = if total.is_zero() {
                Decimal::ZERO
            } else {
                a.market_cap * Decimal::ONE_HUNDRED / total
            };
            let prefix: String = a.name.chars().take(3).collect();
            let whole = percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            MarketShare {
                id: a.id.clone(),
                name: a.name.clone(),
                market_cap: a.market_cap,
                percent,
                label: format!("{} {}%", prefix, whole),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str, name: &str, cap: i64, change: Option<Decimal>) -> AssetSnapshot {
        AssetSnapshot {
            id: AssetId::from(id),
            symbol: id[..3].to_string(),
            name: name.to_string(),
            image: String::new(),
            current_price: Decimal::ONE,
            price_change_24h: change,
            price_change_7d: None,
            market_cap: Decimal::from(cap),
        }
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::from_change(Some(&Decimal::new(25, 1))), Trend::Up);
        assert_eq!(Trend::from_change(Some(&Decimal::ZERO)), Trend::Down);
        assert_eq!(Trend::from_change(Some(&Decimal::new(-1, 0))), Trend::Down);
        assert_eq!(Trend::from_change(None), Trend::Down);
    }

    #[test]
    fn test_stat_cards_take_four_and_mark_selected() {
        let assets = vec![
            asset("bitcoin", "Bitcoin", 5, Some(Decimal::ONE)),
            asset("ethereum", "Ethereum", 4, None),
            asset("tether", "Tether", 3, None),
            asset("binancecoin", "BNB", 2, None),
            asset("solana", "Solana", 1, None),
        ];
        let cards = stat_cards(&assets, &AssetId::from("ethereum"));
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].symbol, "BIT");
        assert_eq!(cards[0].trend, Trend::Up);
        assert!(!cards[0].selected);
        assert!(cards[1].selected);
        assert_eq!(cards[1].trend, Trend::Down);
    }

    #[test]
    fn test_market_cap_distribution() {
        let assets = vec![
            asset("bitcoin", "Bitcoin", 600, None),
            asset("ethereum", "Ethereum", 300, None),
            asset("tether", "Tether", 100, None),
        ];
        let shares = market_cap_distribution(&assets);
        assert_eq!(shares[0].percent, Decimal::from(60));
        assert_eq!(shares[0].label, "Bit 60%");
        assert_eq!(shares[1].label, "Eth 30%");
        assert_eq!(shares[2].label, "Tet 10%");
        let total: Decimal = shares.iter().map(|s| s.percent).sum();
        assert_eq!(total, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_market_cap_distribution_zero_total() {
        let shares = market_cap_distribution(&[asset("bitcoin", "Bi", 0, None)]);
        assert_eq!(shares[0].percent, Decimal::ZERO);
        assert_eq!(shares[0].label, "Bi 0%");
    }
}
