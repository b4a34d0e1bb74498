//! Error types for the lookup gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Config Error ==
/// Raised once at startup when the configuration cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    /// A variable is set but its value is unusable
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

// == Upstream Error ==
/// Failures reported by the upstream metadata API client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response
    #[error("Upstream request failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("Upstream returned an unreadable body: {0}")]
    Decode(String),
}

// == App Error ==
/// Caller-facing error taxonomy for the lookup operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Arguments rejected before any upstream call
    #[error("{0}")]
    InvalidInput(String),

    /// The upstream API failed
    #[error("{message}")]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Short category label used in error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "Invalid Input",
            AppError::Upstream { .. } => "API Error",
            AppError::Internal(_) => "Server Error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { status, message } => AppError::Upstream {
                status: Some(status),
                message,
            },
            other => AppError::Upstream {
                status: None,
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("Invalid arguments: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let upstream_status = match &self {
            AppError::Upstream { status, .. } => *status,
            _ => None,
        };

        let body = Json(ErrorResponse::new(
            self.category(),
            self.to_string(),
            upstream_status,
        ));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup operations.
pub type Result<T> = std::result::Result<T, AppError>;
