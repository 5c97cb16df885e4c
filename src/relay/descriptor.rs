//! Inbound request descriptor and target validation.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::relay::error::RelayError;

/// Target prefix relayed calls must stay inside by default.
pub const ALLOWED_TARGET_PREFIX: &str = "https://api.github.com/";

/// Describes the upstream call a client wants performed on its behalf.
///
/// One descriptor is decoded per inbound POST and dropped when the
/// invocation ends; nothing is shared across invocations. Unknown fields
/// are rejected rather than ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayRequest {
    /// Absolute target URL.
    #[serde(default)]
    pub url: String,

    /// Upstream HTTP method, forwarded verbatim.
    #[serde(default = "default_method")]
    pub method: String,

    /// Headers forwarded to the upstream. The forced `User-Agent` wins over
    /// anything supplied here.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Optional JSON payload, serialized before sending when present.
    #[serde(default)]
    pub body: Option<Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl RelayRequest {
    /// Check the target invariant: the URL must start with `allowed_prefix`.
    /// No outbound call may be issued for a descriptor that fails this.
    pub fn validate(&self, allowed_prefix: &str) -> Result<(), RelayError> {
        if self.url.is_empty() || !self.url.starts_with(allowed_prefix) {
            return Err(RelayError::InvalidTarget);
        }
        Ok(())
    }
}
