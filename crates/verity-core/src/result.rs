//! The canonical analysis view-model and history entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Modality, Verdict};

/// Auxiliary 0-100 metrics shown alongside the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscores {
    pub factual_accuracy: u8,
    pub source_credibility: u8,
    pub sentiment_bias: u8,
    pub linguistic_patterns: u8,
}

/// What was analyzed, tagged by modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Text {
        content: String,
    },
    Url {
        address: String,
    },
    Image {
        filename: String,
        extracted_text: Option<String>,
    },
}

impl Origin {
    #[must_use]
    pub const fn modality(&self) -> Modality {
        match self {
            Self::Text { .. } => Modality::Text,
            Self::Url { .. } => Modality::Url,
            Self::Image { .. } => Modality::Image,
        }
    }

    /// One-line description used in history and reports.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Text { content } => content.clone(),
            Self::Url { address } => format!("Article from: {address}"),
            Self::Image { filename, .. } => format!("Image: {filename}"),
        }
    }
}

/// Result of one analysis, immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    /// Confidence rendered as a 0-100 percentage.
    pub confidence_score: u8,
    pub subscores: Subscores,
    /// Never empty.
    pub factors: Vec<String>,
    /// Never empty.
    pub recommendations: Vec<String>,
    pub captured_at: NaiveDate,
    pub origin: Origin,
}

/// A result recorded in the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique within a session, assigned at insertion.
    pub id: u64,
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Display-only source label.
    pub source: Option<String>,
}
