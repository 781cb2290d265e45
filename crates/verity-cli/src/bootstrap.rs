use anyhow::Context;
use verity_config::VerityConfig;

/// Load `.env` if present, then the layered configuration.
pub fn load_config() -> anyhow::Result<VerityConfig> {
    let config = VerityConfig::load_with_dotenv().context("failed to load verity configuration")?;
    tracing::debug!(
        base_url = %config.backend.normalized_base_url(),
        strategy = ?config.fallback.strategy,
        "configuration loaded"
    );
    Ok(config)
}
