//! Market domain — top-N asset snapshot, validation, summaries.

pub mod client;
mod convert;
pub mod summary;
pub mod wire;

use crate::shared::AssetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use convert::snapshot_from_wire;
pub use summary::{market_cap_distribution, stat_cards, MarketShare, StatCard, Trend};

// ─── AssetSnapshot ───────────────────────────────────────────────────────────

/// One asset's current market data in the settlement currency.
///
/// Immutable once received; a successful fetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub id: AssetId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: Decimal,
    /// 24h change in percent. Absent for freshly listed assets.
    pub price_change_24h: Option<Decimal>,
    pub price_change_7d: Option<Decimal>,
    pub market_cap: Decimal,
}

impl AssetSnapshot {
    /// Selector label, e.g. `Bitcoin (BTC)`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.symbol.to_uppercase())
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(self.price_change_24h.as_ref())
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(Vec<ValidationError>),
    MissingId,
    MissingName(String),
    MissingPrice(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(errors) => {
                writeln!(f, "Snapshot validation errors:")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName(id) => write!(f, "Missing name ({id})"),
            ValidationError::MissingPrice(id) => write!(f, "Missing current price ({id})"),
        }
    }
}

impl std::error::Error for ValidationError {}
