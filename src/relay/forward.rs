//! Outbound forwarding to the upstream API.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Method;
use serde_json::Value;

use crate::relay::descriptor::RelayRequest;
use crate::relay::error::RelayError;

/// `User-Agent` stamped onto every outbound call. Always wins over a
/// caller-supplied value.
pub const FORCED_USER_AGENT: &str = "GitHub-Image-Manager";

/// Result of a completed upstream call: status and parsed JSON, untouched.
#[derive(Debug)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub data: Value,
}

/// Issue the single outbound call a validated descriptor describes.
///
/// The response is awaited in full and decoded as JSON; any failure along
/// the way is terminal and surfaces as [`RelayError::Upstream`].
pub async fn forward(
    client: &reqwest::Client,
    request: &RelayRequest,
) -> Result<RelayResponse, RelayError> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|e| RelayError::Upstream(e.to_string()))?;
    let headers = outbound_headers(&request.headers)?;

    let mut outbound = client.request(method, &request.url).headers(headers);
    if let Some(body) = &request.body {
        outbound = outbound.json(body);
    }

    let response = outbound
        .send()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;
    let status = response.status();
    let data: Value = response
        .json()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;

    Ok(RelayResponse { status, data })
}

/// Build the outbound header set: caller headers overlaid with the forced
/// `User-Agent`.
fn outbound_headers(caller: &BTreeMap<String, String>) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::with_capacity(caller.len() + 1);

    for (name, value) in caller {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| RelayError::Upstream(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| RelayError::Upstream(e.to_string()))?;
        headers.insert(name, value);
    }
    headers.insert(USER_AGENT, HeaderValue::from_static(FORCED_USER_AGENT));

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_user_agent_wins() {
        let mut caller = BTreeMap::new();
        caller.insert("User-Agent".to_string(), "custom/1.0".to_string());
        caller.insert("Authorization".to_string(), "token abc".to_string());

        let headers = outbound_headers(&caller).unwrap();

        assert_eq!(headers.get(USER_AGENT).unwrap(), FORCED_USER_AGENT);
        assert_eq!(headers.get("authorization").unwrap(), "token abc");
    }

    #[test]
    fn empty_caller_headers_still_get_the_user_agent() {
        let headers = outbound_headers(&BTreeMap::new()).unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(USER_AGENT).unwrap(), FORCED_USER_AGENT);
    }

    #[test]
    fn malformed_header_names_are_upstream_failures() {
        let mut caller = BTreeMap::new();
        caller.insert("bad header".to_string(), "x".to_string());

        assert!(matches!(
            outbound_headers(&caller),
            Err(RelayError::Upstream(_))
        ));
    }
}
