//! Error responses returned to clients

use crate::error::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Generic message sent in place of error details outside development
pub const GENERIC_FAILURE: &str = "Search failed";

/// Errors the search endpoint reports to the client
#[derive(Debug)]
pub enum ApiError {
    /// Any method other than POST / OPTIONS
    MethodNotAllowed,
    /// Request failed validation
    BadRequest(&'static str),
    /// Upstream API key missing
    NotConfigured,
    /// Unexpected failure; `detail` is only set in development mode
    Internal { detail: Option<String> },
}

impl ApiError {
    /// Map a pipeline error, keeping its detail only when `expose` is set
    pub fn from_search(err: SearchError, expose: bool) -> Self {
        match err {
            SearchError::Validation(message) => Self::BadRequest(message),
            SearchError::NotConfigured => Self::NotConfigured,
            other => Self::Internal {
                detail: expose.then(|| other.to_string()),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            Self::BadRequest(message) => json!({ "error": message }),
            Self::NotConfigured => json!({ "error": "Search service not configured" }),
            Self::Internal { detail } => json!({
                "error": "Internal server error",
                "message": detail.as_deref().unwrap_or(GENERIC_FAILURE),
            }),
        };
        (status, Json(body)).into_response()
    }
}
