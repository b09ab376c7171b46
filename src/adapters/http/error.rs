//! Error bodies shared by every HTTP module.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::OutreachError;

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 400 with the given message.
pub fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

/// 400 for a body that failed to deserialize.
///
/// The caller still sees the endpoint's missing-field message; the rejection
/// itself, including wrong-type fields, only goes to the debug log.
pub fn rejected_body(rejection: JsonRejection, message: &str) -> Response {
    tracing::debug!(
        status = %rejection.status(),
        reason = %rejection.body_text(),
        "Request body rejected"
    );
    bad_request(message)
}

/// Maps application errors to HTTP responses.
pub fn handle_outreach_error(error: OutreachError) -> Response {
    let status = match &error {
        OutreachError::ClientInput(_) => StatusCode::BAD_REQUEST,
        OutreachError::NotFound(_) => StatusCode::NOT_FOUND,
        OutreachError::Upstream(_) | OutreachError::Database(_) => {
            tracing::error!(error = %error, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(ErrorResponse::new(error.message()))).into_response()
}
