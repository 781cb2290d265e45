//! Health endpoint.

use std::time::Duration;

use verity_core::wire::HealthResponse;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode},
};

impl ApiClient {
    /// Query `GET /health` with its own time bound.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or timeout, a non-success
    /// status, or an unparseable body.
    pub async fn health(&self, timeout: Duration) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint("health");
        tracing::debug!(%url, ?timeout, "probing backend health");
        let resp = self.http.get(&url).timeout(timeout).send().await?;
        let resp = check_response(resp, "Health check failed").await?;
        decode(resp).await
    }
}
