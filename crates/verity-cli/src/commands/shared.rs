use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use verity_config::{MonitorConfig, VerityConfig};
use verity_core::{AnalysisRequest, UserProfile};
use verity_engine::{Dashboard, SessionContext};

use crate::cli::GlobalFlags;

/// Session for the `--user` flag, or a guest session.
pub fn session_from_flags(flags: &GlobalFlags) -> SessionContext {
    flags
        .user
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map_or_else(SessionContext::guest, |name| {
            SessionContext::for_user(UserProfile {
                full_name: name.to_string(),
                email: String::new(),
                organization: None,
            })
        })
}

/// Build and activate a dashboard for `session`, then wait for the first
/// probe cycle.
pub async fn activated_dashboard(
    session: SessionContext,
    config: &VerityConfig,
) -> anyhow::Result<Dashboard> {
    let dashboard = Dashboard::from_config(session, config)
        .context("failed to build analysis backend client")?;
    dashboard.activate();
    let connectivity = dashboard
        .wait_for_connectivity(first_cycle_limit(&config.monitor))
        .await;
    tracing::debug!(connectivity = connectivity.as_str(), "dashboard ready");
    Ok(dashboard)
}

/// Upper bound of one probe cycle: every attempt times out, plus the delays.
pub fn first_cycle_limit(monitor: &MonitorConfig) -> Duration {
    let attempts = monitor.retry_attempts.saturating_add(1);
    monitor.probe_timeout() * attempts + monitor.retry_delay() * monitor.retry_attempts
        + Duration::from_secs(1)
}

/// Read an image file into an image request named after the file.
pub async fn image_request(path: &Path) -> anyhow::Result<AnalysisRequest> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read image {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("image path has no file name")?;
    Ok(AnalysisRequest::image(bytes, filename))
}
