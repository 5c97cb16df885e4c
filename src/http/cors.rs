//! Fixed permissive CORS headers.
//!
//! The relay exists so a browser will let cross-origin scripts read its
//! responses, so the header values are deliberately wide open. They are
//! applied per response path rather than as a blanket middleware layer:
//! relayed responses and preflight answers get the full set, the
//! upstream-failure path gets only `Access-Control-Allow-Origin`, and the
//! rejection paths (400/405) get none.

use axum::http::{header, HeaderMap, HeaderValue};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Attach the full permissive set.
pub fn apply_permissive(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
