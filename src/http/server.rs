//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the relay entry point
//! - Wire up middleware (tracing, limits, timeout, request ID)
//! - Dispatch inbound methods (POST relays, OPTIONS answers preflight)
//! - Serve with graceful shutdown

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::schema::{LimitConfig, UpstreamConfig};
use crate::config::RelayConfig;
use crate::http::cors;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::relay::{forward, RelayError, RelayRequest};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream: UpstreamConfig,
    pub limits: LimitConfig,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        // Initialize the upstream HTTP client
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.upstream_secs))
            .build()?;

        let state = AppState {
            client,
            upstream: config.upstream.clone(),
            limits: config.limits.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(relay_entry))
            .route("/{*path}", any(relay_entry))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Single entry point for the relay endpoint.
///
/// POST is the relay contract proper, OPTIONS answers the browser's
/// preflight, and every other method is rejected before any parsing.
async fn relay_entry(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();

    if method == Method::OPTIONS {
        return preflight_response();
    }
    if method != Method::POST {
        tracing::debug!(request_id = %request_id, method = %method, "Inbound method rejected");
        return RelayError::MethodNotAllowed.into_response();
    }

    match relay(&state, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(request_id = %request_id, error = %error, "Relay invocation failed");
            error.into_response()
        }
    }
}

/// Decode, validate, forward, respond.
///
/// Validation strictly precedes the outbound call; exactly one outbound
/// call is made, and only on the success path.
async fn relay(state: &AppState, request: Request<Body>) -> Result<Response, RelayError> {
    let body = axum::body::to_bytes(request.into_body(), state.limits.max_body_size)
        .await
        .map_err(|_| RelayError::InvalidTarget)?;
    let descriptor: RelayRequest =
        serde_json::from_slice(&body).map_err(|_| RelayError::InvalidTarget)?;
    descriptor.validate(&state.upstream.allowed_prefix)?;

    let upstream = forward(&state.client, &descriptor).await?;

    tracing::debug!(
        target = %descriptor.url,
        method = %descriptor.method,
        status = %upstream.status,
        "Upstream response relayed"
    );

    let mut response = (upstream.status, Json(upstream.data)).into_response();
    cors::apply_permissive(response.headers_mut());
    Ok(response)
}

/// Stateless preflight answer: 200, empty body, permissive headers.
/// No validation, no outbound call.
fn preflight_response() -> Response {
    let mut response = StatusCode::OK.into_response();
    cors::apply_permissive(response.headers_mut());
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
