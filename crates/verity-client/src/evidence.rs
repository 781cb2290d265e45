//! Evidence lookup endpoint.

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode},
};

impl ApiClient {
    /// Fetch the evidence payload for `query` from `GET /evidence/{query}`.
    ///
    /// The payload shape is backend-defined and returned as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not JSON.
    pub async fn evidence(&self, query: &str) -> Result<serde_json::Value, ClientError> {
        let url = self.endpoint(&format!("evidence/{}", urlencoding::encode(query)));
        let resp = self.http.get(&url).send().await.inspect_err(|e| {
            tracing::warn!(%e, "evidence fetch failed");
        })?;
        let resp = check_response(resp, "Failed to fetch evidence").await?;
        decode(resp).await
    }
}
