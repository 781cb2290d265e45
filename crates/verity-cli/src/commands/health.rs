use std::sync::Arc;

use anyhow::Context;
use verity_client::ApiClient;
use verity_config::VerityConfig;
use verity_engine::{BackendProbe, ConnectivityMonitor, MonitorTiming};

use crate::cli::GlobalFlags;
use crate::output::{output, views::HealthView};

/// Run one full probe cycle, retries included, and report the state.
pub async fn handle(config: &VerityConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.backend).context("failed to build backend client")?;
    let base_url = client.base_url().to_string();
    let probe = BackendProbe::new(client, config.monitor.probe_timeout());
    let monitor = ConnectivityMonitor::new(Arc::new(probe), MonitorTiming::from(&config.monitor));

    let connectivity = monitor.probe_now().await;
    output(
        &HealthView {
            base_url,
            connectivity,
        },
        flags.format,
    )
}
