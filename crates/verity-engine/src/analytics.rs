use serde::Serialize;
use verity_core::{HistoryEntry, Verdict};

/// Aggregate figures over a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total: usize,
    pub fake: usize,
    pub real: usize,
    /// Backend answers that committed to neither label.
    pub uncertain: usize,
    /// Share of analyses judged fake, 0-100. Zero for an empty history.
    pub detection_rate: f64,
    /// Mean confidence, 0-100. Zero for an empty history.
    pub average_confidence: f64,
}

impl AnalyticsSummary {
    #[must_use]
    pub fn from_history<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> Self {
        let mut total = 0_usize;
        let mut fake = 0_usize;
        let mut real = 0_usize;
        let mut confidence_sum = 0_u64;
        for entry in entries {
            total += 1;
            match entry.result.verdict {
                Verdict::Fake => fake += 1,
                Verdict::Real => real += 1,
                Verdict::Uncertain => {}
            }
            confidence_sum += u64::from(entry.result.confidence_score);
        }

        #[allow(clippy::cast_precision_loss)]
        let (detection_rate, average_confidence) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                fake as f64 * 100.0 / total as f64,
                confidence_sum as f64 / total as f64,
            )
        };

        Self {
            total,
            fake,
            real,
            uncertain: total - fake - real,
            detection_rate,
            average_confidence,
        }
    }
}
