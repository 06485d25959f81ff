//! Chart axis date labels.

use chrono::{DateTime, Datelike, Utc};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Spanish short month/day label (`"15 ene"`), evaluated in UTC.
pub fn short_month_day(at: &DateTime<Utc>) -> String {
    format!("{} {}", at.day(), MONTHS_ES[at.month0() as usize])
}

/// Label for an epoch-millisecond timestamp. Out-of-range timestamps yield an
/// empty label.
pub fn label_from_millis(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|at| short_month_day(&at))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_month_day() {
        // 2024-01-15T00:00:00Z
        assert_eq!(label_from_millis(1_705_276_800_000), "15 ene");
        // 2024-09-03T12:00:00Z
        assert_eq!(label_from_millis(1_725_364_800_000), "3 sept");
        // 2023-12-31T23:59:59Z
        assert_eq!(label_from_millis(1_704_067_199_000), "31 dic");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(label_from_millis(i64::MAX), "");
    }
}
