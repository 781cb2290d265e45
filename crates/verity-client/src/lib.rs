//! # verity-client
//!
//! HTTP client for the Verity remote analysis backend.
//!
//! Endpoints:
//! - `GET /health` for connectivity probing
//! - `POST /analyze/text`, `POST /analyze/url`, `POST /analyze/image`
//! - `GET /evidence/{query}` for peripheral evidence lookups
//!
//! Non-2xx responses carry `{"detail": "..."}`, surfaced as
//! [`ClientError::Api`].

mod analyze;
mod error;
mod evidence;
mod health;
mod http;

pub use error::ClientError;

use verity_config::BackendConfig;

/// HTTP client bound to one backend base address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from backend configuration.
    ///
    /// The configured analysis timeout bounds every request unless a call
    /// sets its own.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.analysis_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
