use crate::shared::response::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced to the caller of a visualization request.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("Schema unavailable for datasource '{0}'")]
    SchemaUnavailable(String),

    #[error("Invalid query: {0}")]
    InvalidQuerySpec(String),

    #[error("Unknown visualization type: {0}")]
    UnknownVisualization(String),

    #[error("Store request failed: {0}")]
    Store(#[from] StoreError),
}

/// Failures talking to the analytic store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse store response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event at {timestamp} has no numeric '{metric}' value")]
    MissingMetric { metric: String, timestamp: String },

    #[error("Invalid timestamp in store response: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl VizError {
    pub fn status(&self) -> StatusCode {
        match self {
            VizError::SchemaUnavailable(_) => StatusCode::NotFound,
            VizError::InvalidQuerySpec(_) | VizError::UnknownVisualization(_) => {
                StatusCode::BadRequest
            }
            VizError::Store(_) => StatusCode::InternalError,
        }
    }

    pub fn log_error(&self) {
        match self {
            VizError::SchemaUnavailable(ds) => {
                error!(target: "panoramix::viz", datasource = %ds, "Schema unavailable");
            }
            VizError::InvalidQuerySpec(e) => {
                error!(target: "panoramix::viz", "Invalid query: {}", e);
            }
            VizError::UnknownVisualization(kind) => {
                error!(target: "panoramix::viz", viz_type = %kind, "Unknown visualization type");
            }
            VizError::Store(e) => {
                error!(target: "panoramix::viz", "Store request failed: {}", e);
                debug!(target: "panoramix::viz", "Store error details: {:?}", e);
            }
        }
    }
}
