use verity_config::VerityConfig;
use verity_engine::SessionContext;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SignupArgs;
use crate::commands::shell;
use crate::output::{output, views::SessionView};

pub async fn handle(
    args: &SignupArgs,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = open_session(args)?;
    output(&SessionView::new(&session), flags.format)?;
    if args.shell {
        shell::run_session(session, config, flags).await
    } else {
        Ok(())
    }
}

/// Validate the sign-up flags and open a session; every invalid field is
/// listed in the error.
pub fn open_session(args: &SignupArgs) -> anyhow::Result<SessionContext> {
    SessionContext::sign_up(&args.form()).map_err(|errors| {
        let lines: Vec<String> = errors.iter().map(|e| format!("  {e}")).collect();
        anyhow::anyhow!("sign-up rejected:\n{}", lines.join("\n"))
    })
}
