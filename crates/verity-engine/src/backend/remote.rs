use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use verity_client::ApiClient;
use verity_core::{AnalysisRequest, wire::AnalysisResponse};

use super::AnalysisBackend;
use crate::error::AnalysisError;

/// Forwards each request to the matching `/analyze/*` endpoint.
pub struct RemoteBackend {
    client: ApiClient,
}

impl RemoteBackend {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalysisBackend for RemoteBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        let response = match request {
            AnalysisRequest::Text { body, title } => self.client.analyze_text(body, title).await?,
            AnalysisRequest::Url { address } => self.client.analyze_url(address.trim()).await?,
            AnalysisRequest::Image { bytes, .. } => {
                let image_data = BASE64_STANDARD.encode(bytes);
                self.client.analyze_image(&image_data).await?
            }
        };
        Ok(response)
    }
}
