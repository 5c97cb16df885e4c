//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound JSON body
//!     → descriptor.rs (decode into RelayRequest, check target prefix)
//!     → forward.rs (one outbound call, forced User-Agent, JSON decode)
//!     → RelayResponse (upstream status + parsed JSON, verbatim)
//!
//! any failure
//!     → error.rs (terminal; one HTTP response, no retry)
//! ```

pub mod descriptor;
pub mod error;
pub mod forward;

pub use descriptor::{RelayRequest, ALLOWED_TARGET_PREFIX};
pub use error::RelayError;
pub use forward::{forward, RelayResponse, FORCED_USER_AGENT};
