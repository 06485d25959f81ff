//! Price history domain — chart-ready series for one asset.

pub mod client;
pub mod transform;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use transform::transform;

/// A single point on the price and volume charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSample {
    /// Source timestamp, Unix milliseconds.
    pub time: i64,
    /// Short month/day label, e.g. `15 ene`.
    pub date: String,
    /// Price rounded to 2 fraction digits.
    pub price: Decimal,
    /// Volume in millions, rounded to 2 fraction digits.
    pub volume: Decimal,
}

/// Ordered (ascending timestamp) sequence of samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistorySeries(Vec<SeriesSample>);

impl HistorySeries {
    pub fn new(samples: Vec<SeriesSample>) -> Self {
        Self(samples)
    }

    pub fn samples(&self) -> &[SeriesSample] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeriesSample> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn latest(&self) -> Option<&SeriesSample> {
        self.0.last()
    }

    pub fn into_inner(self) -> Vec<SeriesSample> {
        self.0
    }
}

impl<'a> IntoIterator for &'a HistorySeries {
    type Item = &'a SeriesSample;
    type IntoIter = std::slice::Iter<'a, SeriesSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
