//! Raw `[timestamp, value]` pairs → chart series.

use super::wire::SamplePair;
use super::{HistorySeries, SeriesSample};
use crate::shared::fmt::date::label_from_millis;
use crate::shared::fmt::decimal::round2_f64;
use crate::shared::Window;

const MILLION: f64 = 1_000_000.0;

/// Build the chart series for `window` from parallel price and volume arrays.
///
/// Every price sample yields one point; the volume at the same index is
/// divided by one million, or zero when the volume array is shorter. Both
/// are rounded to cents from the float as stored. The
/// result is then thinned to every `window.stride()`-th point starting at
/// index 0. No interpolation or gap filling takes place.
pub fn transform(prices: &[SamplePair], volumes: &[SamplePair], window: Window) -> HistorySeries {
    let samples = prices
        .iter()
        .enumerate()
        .step_by(window.stride())
        .map(|(i, price)| SeriesSample {
            time: price.timestamp_ms(),
            date: label_from_millis(price.timestamp_ms()),
            price: round2_f64(price.value()),
            volume: volumes
                .get(i)
                .map(|v| round2_f64(v.value() / MILLION))
                .unwrap_or_default(),
        })
        .collect();

    HistorySeries::new(samples)
}
