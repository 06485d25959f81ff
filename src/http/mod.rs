//! HTTP transport — `CoinGeckoHttp`, the REST implementation of
//! [`MarketDataSource`](crate::source::MarketDataSource).

pub mod client;

pub use client::CoinGeckoHttp;
