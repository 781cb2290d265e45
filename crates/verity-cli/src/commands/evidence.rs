use anyhow::Context;
use verity_client::ApiClient;
use verity_config::VerityConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EvidenceArgs;
use crate::output::output;

pub async fn handle(
    args: &EvidenceArgs,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.query.trim().is_empty() {
        anyhow::bail!("evidence query is empty");
    }
    let client = ApiClient::new(&config.backend).context("failed to build backend client")?;
    let evidence = client
        .evidence(args.query.trim())
        .await
        .with_context(|| format!("evidence lookup for '{}' failed", args.query.trim()))?;
    output(&evidence, flags.format)
}
