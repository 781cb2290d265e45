//! Interactive dashboard session over stdin.
//!
//! One command per line. Analysis failures are printed and the session goes
//! on; empty input is ignored. `logout` ends the session and clears its
//! history.

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use verity_config::VerityConfig;
use verity_core::{AnalysisRequest, Modality};
use verity_engine::{Dashboard, SessionContext};

use crate::cli::GlobalFlags;
use crate::commands::{analyze, shared};
use crate::output::output;
use crate::output::views::{MessageView, ReportView, StatusView};

const HELP: &str = "\
commands:
  text <body>      analyze text
  url <address>    analyze an article URL
  image <path>     analyze an image file
  history          list past analyses, newest first
  current          show the latest result
  report           print the report of the latest result
  analytics        summarize the session history
  status           connectivity and session status
  logout           clear the session and exit
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Text(String),
    Url(String),
    Image(PathBuf),
    History,
    Current,
    Report,
    Analytics,
    Status,
    Logout,
    Quit,
    Help,
}

/// Parse one input line. `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "text" => ShellCommand::Text(rest.to_string()),
        "url" => ShellCommand::Url(rest.to_string()),
        "image" if rest.is_empty() => return Err("usage: image <path>".to_string()),
        "image" => ShellCommand::Image(PathBuf::from(rest)),
        "history" => ShellCommand::History,
        "current" => ShellCommand::Current,
        "report" => ShellCommand::Report,
        "analytics" => ShellCommand::Analytics,
        "status" => ShellCommand::Status,
        "logout" => ShellCommand::Logout,
        "quit" | "exit" => ShellCommand::Quit,
        "help" | "?" => ShellCommand::Help,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

pub async fn handle(config: &VerityConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    run_session(shared::session_from_flags(flags), config, flags).await
}

/// Run the shell for an already opened session.
pub async fn run_session(
    session: SessionContext,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let dashboard = shared::activated_dashboard(session, config).await?;
    if !flags.quiet {
        eprintln!("backend {}; type 'help' for commands", dashboard.connectivity().label());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        match command {
            ShellCommand::Quit => break,
            ShellCommand::Logout => {
                let session = dashboard.logout();
                let name = session.as_ref().map_or("Guest", |s| s.display_name());
                return output(&MessageView::new(format!("logged out {name}")), flags.format);
            }
            command => {
                if let Err(error) = run(&dashboard, command, flags).await {
                    eprintln!("error: {error:#}");
                }
            }
        }
    }

    dashboard.teardown();
    Ok(())
}

async fn run(
    dashboard: &Dashboard,
    command: ShellCommand,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::Text(body) => {
            analyze_and_print(dashboard, AnalysisRequest::text(body), flags).await
        }
        ShellCommand::Url(address) => {
            analyze_and_print(dashboard, AnalysisRequest::url(address), flags).await
        }
        ShellCommand::Image(path) => {
            let request = shared::image_request(&path).await?;
            analyze_and_print(dashboard, request, flags).await
        }
        ShellCommand::History => output(&dashboard.history(), flags.format),
        ShellCommand::Current => match dashboard.current() {
            Some(entry) => output(&entry, flags.format),
            None => output(&MessageView::new("no analysis yet"), flags.format),
        },
        ShellCommand::Report => match dashboard.report() {
            Some(report) => output(&ReportView { report }, flags.format),
            None => output(&MessageView::new("no analysis yet"), flags.format),
        },
        ShellCommand::Analytics => output(&dashboard.analytics(), flags.format),
        ShellCommand::Status => {
            let status = StatusView {
                connectivity: dashboard.connectivity(),
                user: dashboard
                    .session()
                    .map_or_else(|| "Guest".to_string(), |s| s.display_name().to_string()),
                history: dashboard.history().len(),
                analyzing: Modality::ALL
                    .into_iter()
                    .filter(|m| dashboard.is_analyzing(*m))
                    .collect(),
            };
            output(&status, flags.format)
        }
        ShellCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        ShellCommand::Logout | ShellCommand::Quit => Ok(()),
    }
}

async fn analyze_and_print(
    dashboard: &Dashboard,
    request: AnalysisRequest,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Empty input is a silent no-op.
    match analyze::submit(dashboard, request).await? {
        Some(view) => output(&view, flags.format),
        None => Ok(()),
    }
}
