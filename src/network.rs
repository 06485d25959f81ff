//! Network URL constants for the market data API.

/// Default REST API base URL (CoinGecko public API).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";
