//! Conversion: AssetResponse → AssetSnapshot (TryFrom + validation).

use super::wire::AssetResponse;
use super::{AssetSnapshot, ValidationError};
use crate::shared::fmt::decimal::from_f64;
use crate::shared::AssetId;
use std::collections::HashSet;

impl TryFrom<AssetResponse> for AssetSnapshot {
    type Error = ValidationError;

    fn try_from(source: AssetResponse) -> Result<Self, Self::Error> {
        if source.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.trim().is_empty() {
            return Err(ValidationError::MissingName(source.id));
        }
        let current_price = match source.current_price {
            Some(price) => from_f64(price),
            None => return Err(ValidationError::MissingPrice(source.id)),
        };

        Ok(Self {
            id: AssetId::from(source.id),
            symbol: source.symbol,
            name: source.name,
            image: source.image.unwrap_or_default(),
            current_price,
            price_change_24h: source.price_change_percentage_24h.map(from_f64),
            price_change_7d: source.price_change_percentage_7d_in_currency.map(from_f64),
            market_cap: source.market_cap.map(from_f64).unwrap_or_default(),
        })
    }
}

/// Validate a full markets response. All-or-nothing: any invalid entry fails
/// the whole snapshot. Order is preserved; a repeated id keeps its first entry.
pub fn snapshot_from_wire(
    source: Vec<AssetResponse>,
) -> Result<Vec<AssetSnapshot>, ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut assets = Vec::with_capacity(source.len());

    for entry in source {
        match AssetSnapshot::try_from(entry) {
            Ok(asset) => {
                if seen.insert(asset.id.clone()) {
                    assets.push(asset);
                } else {
                    tracing::warn!(id = %asset.id, "Dropping duplicate asset in snapshot");
                }
            }
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(assets)
    } else {
        Err(ValidationError::Multiple(errors))
    }
}
