//! # coinboard
//!
//! Market data client and dashboard state for a top-N cryptocurrency
//! dashboard, for both native and WASM targets. Rendering is left to the UI
//! layer; this crate decides when to fetch, shapes API payloads into
//! chart-ready series, and tracks loading/error/ready status.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared types, formatting, domain models and the dashboard
//!    state machine (always available, WASM-safe)
//! 2. **Data source** — the `MarketDataSource` trait
//! 3. **HTTP** — `CoinGeckoHttp`, the REST implementation
//! 4. **High-Level Client** — `DashboardClient` with nested sub-clients
//! 5. **Controller** — `Dashboard`, which runs fetches and applies completions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//!
//! let client = DashboardClient::builder().build()?;
//! let dashboard = Dashboard::new(client);
//!
//! dashboard.mount().await;
//! dashboard.select_window(Window::Day30).await;
//!
//! let state = dashboard.snapshot().await;
//! for point in state.series() {
//!     println!("{} {}", point.date, point.price);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, serde helpers and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Data source ─────────────────────────────────────────────────────

/// `MarketDataSource` — the transport seam.
pub mod source;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// REST client for the public market data API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point for market data.
pub mod client;

// ── Layer 5: Controller ──────────────────────────────────────────────────────

/// `Dashboard` — async driver for the dashboard state.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AssetId, Currency, Window};

    // Domain types — market
    pub use crate::domain::market::{AssetSnapshot, MarketShare, StatCard, Trend};

    // Domain types — price history
    pub use crate::domain::price_history::{HistorySeries, SeriesSample};

    // Domain types — dashboard
    pub use crate::domain::dashboard::{
        DashboardState, FetchRequest, Filters, Status, Ticket, View,
    };

    // Errors
    pub use crate::error::{DashboardError, HttpError, SNAPSHOT_ERROR_MESSAGE};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Data source
    pub use crate::source::MarketDataSource;

    // HTTP transport
    #[cfg(feature = "http")]
    pub use crate::http::CoinGeckoHttp;

    // Client + sub-clients
    pub use crate::client::{
        DashboardClient, DashboardClientBuilder, MarketsClient, PriceHistorySubClient,
    };

    // Controller
    pub use crate::dashboard::{Dashboard, REFRESH_INDICATOR_MIN};
}
