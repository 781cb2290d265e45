use verity_config::VerityConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Health => commands::health::handle(config, flags).await,
        Commands::Text(args) => commands::analyze::handle_text(&args, config, flags).await,
        Commands::Url(args) => commands::analyze::handle_url(&args, config, flags).await,
        Commands::Image(args) => commands::analyze::handle_image(&args, config, flags).await,
        Commands::Evidence(args) => commands::evidence::handle(&args, config, flags).await,
        Commands::Shell => commands::shell::handle(config, flags).await,
        Commands::Signup(args) => commands::signup::handle(&args, config, flags).await,
    }
}
