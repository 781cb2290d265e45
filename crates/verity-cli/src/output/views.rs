use std::fmt::Write as _;

use serde::Serialize;
use verity_core::{AnalysisResult, ConnectivityState, HistoryEntry, Modality};
use chrono::{DateTime, Utc};
use verity_engine::{AnalyticsSummary, SessionContext};

use super::TextView;

const SUMMARY_WIDTH: usize = 60;

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub base_url: String,
    pub connectivity: ConnectivityState,
}

impl TextView for HealthView {
    fn to_text(&self) -> String {
        format!("{} is {}", self.base_url, self.connectivity.label())
    }
}

/// One completed analysis. Text format prints the full report.
#[derive(Debug, Serialize)]
pub struct AnalysisView {
    pub connectivity: ConnectivityState,
    pub entry: HistoryEntry,
    #[serde(skip)]
    pub report: String,
}

impl TextView for AnalysisView {
    fn to_text(&self) -> String {
        self.report.clone()
    }
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub report: String,
}

impl TextView for ReportView {
    fn to_text(&self) -> String {
        self.report.clone()
    }
}

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub connectivity: ConnectivityState,
    pub user: String,
    pub history: usize,
    pub analyzing: Vec<Modality>,
}

impl TextView for StatusView {
    fn to_text(&self) -> String {
        let mut out = format!(
            "{} | user: {} | history: {}",
            self.connectivity.label(),
            self.user,
            self.history
        );
        if !self.analyzing.is_empty() {
            let running: Vec<_> = self.analyzing.iter().map(|m| m.as_str()).collect();
            let _ = write!(out, " | analyzing: {}", running.join(", "));
        }
        out
    }
}

/// Account opened by `signup`.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl SessionView {
    #[must_use]
    pub fn new(session: &SessionContext) -> Self {
        let user = session.user();
        Self {
            user: session.display_name().to_string(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            organization: user.and_then(|u| u.organization.clone()),
            started_at: session.started_at(),
        }
    }
}

impl TextView for SessionView {
    fn to_text(&self) -> String {
        let mut out = format!("signed up {} <{}>", self.user, self.email);
        if let Some(organization) = &self.organization {
            let _ = write!(out, " ({organization})");
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub message: String,
}

impl MessageView {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TextView for MessageView {
    fn to_text(&self) -> String {
        self.message.clone()
    }
}

impl TextView for AnalysisResult {
    fn to_text(&self) -> String {
        format!(
            "{:<4} {:>3}%  {}  {}",
            self.verdict.as_str(),
            self.confidence_score,
            self.captured_at,
            truncate(&self.origin.summary(), SUMMARY_WIDTH)
        )
    }
}

impl TextView for HistoryEntry {
    fn to_text(&self) -> String {
        let mut line = format!("#{:<3} {}", self.id, self.result.to_text());
        if let Some(source) = &self.source {
            let _ = write!(line, " ({source})");
        }
        line
    }
}

impl TextView for Vec<HistoryEntry> {
    fn to_text(&self) -> String {
        if self.is_empty() {
            return String::from("(no analyses yet)");
        }
        self.iter()
            .map(TextView::to_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextView for AnalyticsSummary {
    fn to_text(&self) -> String {
        format!(
            "total: {}\nfake: {}\nreal: {}\nuncertain: {}\ndetection rate: {:.1}%\naverage confidence: {:.1}%",
            self.total,
            self.fake,
            self.real,
            self.uncertain,
            self.detection_rate,
            self.average_confidence
        )
    }
}

impl TextView for serde_json::Value {
    fn to_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

/// Shorten to `width` characters on a character boundary, single line.
fn truncate(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut short: String = flat.chars().take(width.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
