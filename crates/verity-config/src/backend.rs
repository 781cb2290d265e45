//! Remote analysis backend configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

/// Default backend address for local development.
fn default_base_url() -> String {
    String::from("http://localhost:8000")
}

const fn default_analysis_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    String::from("verity/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base address every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for one analysis request; exceeding it is a transport failure.
    #[serde(default = "default_analysis_timeout_secs")]
    pub analysis_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analysis_timeout_secs: default_analysis_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub const fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject non-HTTP base URLs and a zero timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        let scheme_ok = url.starts_with("http://") || url.starts_with("https://");
        if !scheme_ok || url.trim_end_matches('/').ends_with(':') {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.analysis_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.analysis_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
