//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and body decoding so the endpoint methods
//! stay focused on request construction.

use serde::de::DeserializeOwned;
use verity_core::wire::ErrorBody;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise reads the body and
/// returns [`ClientError::Api`] carrying its `detail` field, or
/// `default_message` when the body has none.
pub async fn check_response(
    resp: reqwest::Response,
    default_message: &str,
) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_detail(&body).unwrap_or_else(|| default_message.to_string()),
    })
}

/// Decode a JSON body, mapping failures to [`ClientError::Parse`].
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Parse(e.to_string()))
}

fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}
