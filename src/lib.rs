//! CORS relay for browser clients of the GitHub API.
//!
//! Browsers refuse to let cross-origin scripts attach an `Authorization`
//! header to calls against `api.github.com`. This service sits in between:
//! the client POSTs a description of the call it wants made, the relay
//! performs that call server-side, and the JSON result comes back with
//! permissive CORS headers so the browser will hand it to the script.
//!
//! # Data Flow
//! ```text
//! POST { url, method, headers, body }
//!     → http/server.rs (Axum setup, method dispatch)
//!     → relay/descriptor.rs (decode, target prefix check)
//!     → relay/forward.rs (outbound call, forced User-Agent, JSON decode)
//!     → http/cors.rs (attach permissive headers)
//!     → upstream status + JSON back to client
//! ```

pub mod config;
pub mod http;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
