//! Custom serde helpers for API wire formats.

/// Deserializes an epoch-millisecond timestamp that may arrive as an integer
/// or as a float (`1711929600000` or `1711929600000.0`).
pub mod timestamp_ms {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Number::deserialize(deserializer)?;
        if let Some(ms) = value.as_i64() {
            return Ok(ms);
        }
        value
            .as_f64()
            .filter(|ms| ms.is_finite())
            .map(|ms| ms as i64)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", value)))
    }
}
