use verity_config::VerityConfig;
use verity_core::AnalysisRequest;
use verity_engine::{Dashboard, SkipReason, Submission};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ImageArgs, TextArgs, UrlArgs};
use crate::commands::shared;
use crate::output::{output, views::AnalysisView};

pub async fn handle_text(
    args: &TextArgs,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = match &args.title {
        Some(title) => AnalysisRequest::Text {
            body: args.body.clone(),
            title: title.clone(),
        },
        None => AnalysisRequest::text(args.body.as_str()),
    };
    run_once(request, config, flags).await
}

pub async fn handle_url(
    args: &UrlArgs,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    run_once(AnalysisRequest::url(args.address.as_str()), config, flags).await
}

pub async fn handle_image(
    args: &ImageArgs,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = shared::image_request(&args.path).await?;
    run_once(request, config, flags).await
}

async fn run_once(
    request: AnalysisRequest,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let modality = request.modality();
    let dashboard = shared::activated_dashboard(shared::session_from_flags(flags), config).await?;
    let outcome = submit(&dashboard, request).await;
    dashboard.teardown();
    match outcome? {
        Some(view) => output(&view, flags.format),
        None => anyhow::bail!("nothing to analyze: {modality} input is empty"),
    }
}

/// Submit one request and build its view. `None` when the input was empty.
pub async fn submit(
    dashboard: &Dashboard,
    request: AnalysisRequest,
) -> anyhow::Result<Option<AnalysisView>> {
    let modality = request.modality();
    match dashboard.submit(request).await? {
        Submission::Completed(entry) => Ok(Some(AnalysisView {
            connectivity: dashboard.connectivity(),
            report: dashboard.report().unwrap_or_default(),
            entry,
        })),
        Submission::Skipped(SkipReason::EmptyInput) => Ok(None),
        Submission::Skipped(SkipReason::InFlight) => {
            anyhow::bail!("a {modality} analysis is already running")
        }
        Submission::Discarded => anyhow::bail!("analysis finished after the session ended"),
    }
}
