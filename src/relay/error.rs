//! Relay error taxonomy.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::http::cors;

/// Errors terminal for a single relay invocation.
///
/// Every variant maps onto exactly one HTTP response; nothing is retried or
/// recovered locally, and nothing is recorded beyond the response itself.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound method was not POST.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Missing or undecodable descriptor, or a target outside the allowed
    /// prefix.
    #[error("Invalid URL")]
    InvalidTarget,

    /// Failure while issuing the outbound call or decoding its response.
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidTarget => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "error": self.to_string() }));

        // The upstream-failure path carries Access-Control-Allow-Origin so
        // the caller's browser can read the failure body. The rejection
        // paths never reach the forwarding stage and carry no CORS headers.
        match self {
            RelayError::Upstream(_) => (
                status,
                [(header::ACCESS_CONTROL_ALLOW_ORIGIN, cors::ALLOW_ORIGIN)],
                body,
            )
                .into_response(),
            _ => (status, body).into_response(),
        }
    }
}
