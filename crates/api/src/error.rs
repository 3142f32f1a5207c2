//! API Error Responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use voltage_ingest::IngestError;

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload could not be turned into a voltage series
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Analysis task panicked or was cancelled
    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Ingest(IngestError::Csv(_)) => StatusCode::BAD_REQUEST,
            Self::Ingest(IngestError::Io(_)) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Ingest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.kind(),
            Self::Task(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Analysis failed: {}", self);
        } else {
            warn!("Rejected upload: {}", self);
        }

        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };
        (status, Json(body)).into_response()
    }
}
