//! Single health-probe attempts.

use std::time::Duration;

use async_trait::async_trait;
use verity_client::{ApiClient, ClientError};

/// Outcome of one bounded request to the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeAttempt {
    /// Success response whose body reports `healthy`.
    Healthy,
    /// Non-success response, or a success body reporting anything else.
    Unhealthy,
    /// Timeout or transport failure. The only outcome that is retried.
    Unreachable,
}

/// Something that can be asked once whether the backend is up.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn probe(&self) -> ProbeAttempt;
}

/// Probes `GET /health` on the remote backend.
pub struct BackendProbe {
    client: ApiClient,
    timeout: Duration,
}

impl BackendProbe {
    #[must_use]
    pub const fn new(client: ApiClient, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl HealthProbe for BackendProbe {
    async fn probe(&self) -> ProbeAttempt {
        match self.client.health(self.timeout).await {
            Ok(health) if health.is_healthy() => ProbeAttempt::Healthy,
            Ok(health) => {
                tracing::debug!(status = %health.status, "backend reports non-healthy status");
                ProbeAttempt::Unhealthy
            }
            Err(ClientError::Http(e)) => {
                tracing::debug!(%e, timeout = e.is_timeout(), "health probe failed in transport");
                ProbeAttempt::Unreachable
            }
            Err(e) => {
                tracing::debug!(%e, "health probe got an unusable response");
                ProbeAttempt::Unhealthy
            }
        }
    }
}
