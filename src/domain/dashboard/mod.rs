//! Dashboard domain — selected filters, load status and fetch bookkeeping.

pub mod state;

use crate::shared::{AssetId, Currency, Window};
use serde::{Deserialize, Serialize};

pub use state::DashboardState;

/// Load status of the snapshot-driven dashboard.
///
/// `Loading` is only the initial status; after the first snapshot completes the
/// status alternates between `Ready` and `Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Loading,
    Ready,
    Error,
}

/// What the UI layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Loading indicator only.
    Loading,
    /// Blocking error view with a retry action.
    Error(String),
    /// Cards, charts and filters.
    Ready,
}

/// User-selected filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub asset: AssetId,
    pub window: Window,
    pub currency: Currency,
}

/// Identifies one issued fetch. Only the most recently issued ticket of each
/// kind may be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn next(self) -> Ticket {
        Ticket(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A fetch the caller should perform and report back.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    Snapshot {
        ticket: Ticket,
        currency: Currency,
    },
    History {
        ticket: Ticket,
        asset: AssetId,
        window: Window,
        currency: Currency,
    },
}

impl FetchRequest {
    pub fn ticket(&self) -> Ticket {
        match self {
            FetchRequest::Snapshot { ticket, .. } | FetchRequest::History { ticket, .. } => *ticket,
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, FetchRequest::Snapshot { .. })
    }
}
