//! Analysis endpoints.

use serde::Serialize;
use verity_core::{
    Modality,
    wire::{AnalysisResponse, ImageAnalysisBody, TextAnalysisBody, UrlAnalysisBody},
};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode},
};

impl ApiClient {
    /// Analyze free text via `POST /analyze/text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or times out, the backend
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn analyze_text(
        &self,
        text: &str,
        title: &str,
    ) -> Result<AnalysisResponse, ClientError> {
        let body = TextAnalysisBody {
            text: text.to_string(),
            title: title.to_string(),
        };
        self.post_analysis(Modality::Text, &body).await
    }

    /// Analyze an article address via `POST /analyze/url`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze_text`].
    pub async fn analyze_url(&self, url: &str) -> Result<AnalysisResponse, ClientError> {
        let body = UrlAnalysisBody {
            url: url.to_string(),
        };
        self.post_analysis(Modality::Url, &body).await
    }

    /// Analyze a base64-encoded image via `POST /analyze/image`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::analyze_text`].
    pub async fn analyze_image(&self, image_data: &str) -> Result<AnalysisResponse, ClientError> {
        let body = ImageAnalysisBody {
            image_data: image_data.to_string(),
        };
        self.post_analysis(Modality::Image, &body).await
    }

    async fn post_analysis<B: Serialize + Sync>(
        &self,
        modality: Modality,
        body: &B,
    ) -> Result<AnalysisResponse, ClientError> {
        let url = self.endpoint(&format!("analyze/{modality}"));
        tracing::debug!(%url, %modality, "submitting analysis request");

        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%modality, %e, "analysis request failed"))?;
        let resp = check_response(resp, default_error_message(modality)).await?;
        decode(resp).await
    }
}

const fn default_error_message(modality: Modality) -> &'static str {
    match modality {
        Modality::Text => "Analysis failed",
        Modality::Url => "URL analysis failed",
        Modality::Image => "Image analysis failed",
    }
}
