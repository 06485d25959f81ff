//! Unified error types.

use crate::domain::market::ValidationError;
use thiserror::Error;

/// Fixed user-facing message shown when the market snapshot cannot be loaded.
pub const SNAPSHOT_ERROR_MESSAGE: &str =
    "No se pudieron cargar los datos. Por favor, intenta de nuevo.";

/// Top-level error.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The top-N snapshot request failed (non-success status or transport).
    #[error("Snapshot fetch failed: {0}")]
    SnapshotFetch(#[source] HttpError),

    /// The snapshot response arrived but failed validation.
    #[error("Snapshot rejected: {0}")]
    SnapshotInvalid(#[source] ValidationError),

    /// The history request failed (non-success status or transport).
    #[error("History fetch failed: {0}")]
    HistoryFetch(#[source] HttpError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DashboardError {
    /// Whether this error should change the user-visible status.
    pub fn is_snapshot_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::SnapshotFetch(_) | DashboardError::SnapshotInvalid(_)
        )
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl HttpError {
    /// Map a non-success status code and response body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited,
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_client_errors() {
        assert!(matches!(
            HttpError::from_status(401, String::new()),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            HttpError::from_status(404, "coin not found".into()),
            HttpError::NotFound(body) if body == "coin not found"
        ));
        assert!(matches!(
            HttpError::from_status(429, String::new()),
            HttpError::RateLimited
        ));
        assert!(matches!(
            HttpError::from_status(422, "bad days".into()),
            HttpError::BadRequest(_)
        ));
    }

    #[test]
    fn test_from_status_maps_server_errors() {
        match HttpError::from_status(503, "down".into()) {
            HttpError::ServerError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_failure_flag() {
        let err = DashboardError::SnapshotFetch(HttpError::RateLimited);
        assert!(err.is_snapshot_failure());
        let err = DashboardError::HistoryFetch(HttpError::RateLimited);
        assert!(!err.is_snapshot_failure());
        let err = DashboardError::SnapshotInvalid(ValidationError::MissingId);
        assert!(err.is_snapshot_failure());
        assert!(!DashboardError::Validation("x".into()).is_snapshot_failure());
        assert_eq!(
            DashboardError::HistoryFetch(HttpError::Unauthorized).to_string(),
            "History fetch failed: Unauthorized"
        );
    }
}
