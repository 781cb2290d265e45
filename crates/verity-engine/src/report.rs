//! Plain-text report of a single analysis result.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use verity_core::{AnalysisResult, Origin};

/// Render the downloadable report for `result`.
///
/// `user` is the display name of the session, `"Guest"` when nobody signed up.
#[must_use]
pub fn render(result: &AnalysisResult, user: &str, generated_at: DateTime<Local>) -> String {
    let mut out = String::new();
    let scores = &result.subscores;

    let _ = writeln!(out, "FAKE NEWS DETECTION REPORT");
    let _ = writeln!(out, "Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "User: {user}");
    let _ = writeln!(out);

    let _ = writeln!(out, "ANALYSIS SUMMARY");
    let _ = writeln!(out, "Content: {}", result.origin.summary());
    let _ = writeln!(out, "Verdict: {}", result.verdict);
    let _ = writeln!(out, "Confidence: {}%", result.confidence_score);
    let _ = writeln!(out, "Date: {}", result.captured_at);
    let _ = writeln!(out);

    let _ = writeln!(out, "DETAILED ANALYSIS");
    let _ = writeln!(out, "Factual Accuracy: {}%", scores.factual_accuracy);
    let _ = writeln!(out, "Source Credibility: {}%", scores.source_credibility);
    let _ = writeln!(out, "Sentiment Bias: {}%", scores.sentiment_bias);
    let _ = writeln!(out, "Linguistic Patterns: {}%", scores.linguistic_patterns);
    let _ = writeln!(out);

    let _ = writeln!(out, "KEY FACTORS");
    for factor in &result.factors {
        let _ = writeln!(out, "• {factor}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "RECOMMENDATIONS");
    for recommendation in &result.recommendations {
        let _ = writeln!(out, "• {recommendation}");
    }

    if let Origin::Image {
        extracted_text: Some(text),
        ..
    } = &result.origin
    {
        let _ = writeln!(out);
        let _ = writeln!(out, "EXTRACTED TEXT");
        let _ = writeln!(out, "{text}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "Generated by Verity");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use verity_core::{Subscores, Verdict};

    fn result(origin: Origin) -> AnalysisResult {
        AnalysisResult {
            verdict: Verdict::Fake,
            confidence_score: 92,
            subscores: Subscores {
                factual_accuracy: 70,
                source_credibility: 65,
                sentiment_bias: 40,
                linguistic_patterns: 75,
            },
            factors: vec!["Multiple scam/hoax patterns detected".into()],
            recommendations: vec!["Verify with additional sources".into()],
            captured_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            origin,
        }
    }

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn report_lists_every_section() {
        let report = render(
            &result(Origin::Url {
                address: "https://x.io/story".into(),
            }),
            "Ada Lovelace",
            at(),
        );

        assert!(report.starts_with("FAKE NEWS DETECTION REPORT\n"));
        assert!(report.contains("Generated on: 2024-03-01 09:30:00"));
        assert!(report.contains("User: Ada Lovelace"));
        assert!(report.contains("Content: Article from: https://x.io/story"));
        assert!(report.contains("Verdict: FAKE"));
        assert!(report.contains("Confidence: 92%"));
        assert!(report.contains("Sentiment Bias: 40%"));
        assert!(report.contains("• Multiple scam/hoax patterns detected"));
        assert!(report.contains("• Verify with additional sources"));
        assert!(!report.contains("EXTRACTED TEXT"));
    }

    #[test]
    fn image_report_includes_extracted_text() {
        let report = render(
            &result(Origin::Image {
                filename: "flyer.png".into(),
                extracted_text: Some("FREE PHONES FOR ALL".into()),
            }),
            "Guest",
            at(),
        );
        assert!(report.contains("User: Guest"));
        assert!(report.contains("Content: Image: flyer.png"));
        assert!(report.contains("EXTRACTED TEXT\nFREE PHONES FOR ALL\n"));
    }

    #[test]
    fn uncertain_verdict_is_reported_as_is() {
        let mut uncertain = result(Origin::Text {
            content: "short claim".into(),
        });
        uncertain.verdict = Verdict::Uncertain;
        uncertain.confidence_score = 50;
        let report = render(&uncertain, "Guest", at());
        assert!(report.contains("Verdict: UNCERTAIN"));
        assert!(report.contains("Confidence: 50%"));
    }
}
