//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, method dispatch)
//!     → request.rs (stamp x-request-id)
//!     → [relay subsystem validates and forwards]
//!     → cors.rs (attach permissive headers)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
