//! Deterministic keyword heuristic used for offline results.
//!
//! Pure function of the input text: counts which suspicious and credible
//! phrases occur in the lower-cased text. The excess of one kind over the
//! other picks the verdict and raises confidence by a fixed step per excess
//! hit, capped. A tie is `REAL` at a fixed baseline.

use serde::Serialize;
use verity_core::{
    Verdict,
    wire::{FactualIndicators, LinguisticIndicators, LlmAnalysis, SourceIndicators},
};

/// Phrases typical of hoaxes, scams, and clickbait.
pub const SUSPICIOUS_PHRASES: &[&str] = &[
    "breaking:",
    "urgent:",
    "shocking",
    "unbelievable",
    "scientists hate this",
    "doctors don't want you to know",
    "they don't want you to know",
    "mainstream media won't tell you",
    "you won't believe",
    "this will shock you",
    "click here",
    "secret",
    "conspiracy",
    "cover-up",
    "free iphone",
    "free phone",
    "free money",
    "government giving",
    "all students will receive",
    "register your name",
    "claim your prize",
    "congratulations you have won",
    "viral message",
    "whatsapp",
    "too good to be true",
    "limited time offer",
    "act now",
    "hoax",
];

/// Phrases typical of sourced reporting.
pub const CREDIBLE_PHRASES: &[&str] = &[
    "according to",
    "study shows",
    "research indicates",
    "data suggests",
    "experts say",
    "published in",
    "peer-reviewed",
    "university",
    "institute",
    "official statement",
    "press release",
];

const BASELINE_CONFIDENCE: u8 = 75;
const STEP_PER_EXCESS_HIT: u8 = 5;
const MAX_CONFIDENCE: u8 = 95;
const TIE_CONFIDENCE: u8 = 78;

/// Verdict and counts produced by [`score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeuristicScore {
    pub verdict: Verdict,
    /// 0-100.
    pub confidence: u8,
    pub suspicious: usize,
    pub credible: usize,
}

/// Score `text` against the phrase lists.
#[must_use]
pub fn score(text: &str) -> HeuristicScore {
    let content = text.to_lowercase();
    let count = |phrases: &[&str]| phrases.iter().filter(|p| content.contains(**p)).count();
    let suspicious = count(SUSPICIOUS_PHRASES);
    let credible = count(CREDIBLE_PHRASES);

    let (verdict, confidence) = match suspicious.cmp(&credible) {
        std::cmp::Ordering::Greater => (Verdict::Fake, scaled(suspicious - credible)),
        std::cmp::Ordering::Less => (Verdict::Real, scaled(credible - suspicious)),
        std::cmp::Ordering::Equal => (Verdict::Real, TIE_CONFIDENCE),
    };

    HeuristicScore {
        verdict,
        confidence,
        suspicious,
        credible,
    }
}

fn scaled(excess: usize) -> u8 {
    let step = u8::try_from(excess)
        .unwrap_or(u8::MAX)
        .saturating_mul(STEP_PER_EXCESS_HIT);
    BASELINE_CONFIDENCE.saturating_add(step).min(MAX_CONFIDENCE)
}

impl HeuristicScore {
    /// Indicator block shaped like the backend's `llm_analysis`.
    #[must_use]
    pub fn indicators(&self, original_text: &str) -> LlmAnalysis {
        let suspicious = count_as_f64(self.suspicious);
        let credible = count_as_f64(self.credible);
        LlmAnalysis {
            factual_indicators: Some(FactualIndicators {
                claims_verifiable: Some(self.credible > 0),
                specific_dates: Some(has_date_like(original_text)),
                named_sources: Some(self.credible > self.suspicious),
                quotes_attributed: Some(original_text.contains('"') && self.credible > 0),
            }),
            source_indicators: Some(SourceIndicators {
                authority_claims: Some((0.2 * credible).min(1.0)),
                conspiracy_theory_language: Some((0.3 * suspicious).min(1.0)),
                unverified_claims: Some((0.2 * suspicious).min(1.0)),
            }),
            linguistic_indicators: Some(LinguisticIndicators {
                emotional_language: Some((0.2 * suspicious).min(1.0)),
                exaggeration: Some(if self.suspicious > 0 { 0.6 } else { 0.3 }),
                clickbait_elements: Some((0.25 * suspicious).min(1.0)),
            }),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
const fn count_as_f64(count: usize) -> f64 {
    count as f64
}

/// A four-digit run or a `d/d` style date.
fn has_date_like(text: &str) -> bool {
    let bytes = text.as_bytes();
    let four_digits = bytes
        .windows(4)
        .any(|w| w.iter().all(u8::is_ascii_digit));
    let slash_date = bytes.windows(3).any(|w| {
        w[0].is_ascii_digit() && w[1] == b'/' && w[2].is_ascii_digit()
    });
    four_digits || slash_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn same_text_scores_identically() {
        let text = "URGENT: government giving free iPhone to all students, according to a viral message";
        assert_eq!(score(text), score(text));
    }

    #[rstest]
    #[case("Shocking secret they don't want you to know")]
    #[case("BREAKING: free phone for everyone who will register your name")]
    #[case("hoax alert: click here, act now")]
    fn two_or_more_suspicious_without_credible_is_confident_fake(#[case] text: &str) {
        let result = score(text);
        assert!(result.suspicious >= 2);
        assert_eq!(result.credible, 0);
        assert_eq!(result.verdict, Verdict::Fake);
        assert!(result.confidence >= 85, "confidence {}", result.confidence);
    }

    #[rstest]
    #[case("According to a peer-reviewed study published in Nature")]
    #[case("University researchers: data suggests a decline")]
    fn two_or_more_credible_without_suspicious_is_real(#[case] text: &str) {
        let result = score(text);
        assert!(result.credible >= 2);
        assert_eq!(result.suspicious, 0);
        assert_eq!(result.verdict, Verdict::Real);
        assert!(result.confidence >= 85);
    }

    #[test]
    fn no_matches_is_real_at_baseline() {
        let result = score("The council met on Tuesday to discuss parking.");
        assert_eq!(result.suspicious, 0);
        assert_eq!(result.credible, 0);
        assert_eq!(result.verdict, Verdict::Real);
        assert_eq!(result.confidence, 78);
    }

    #[test]
    fn balanced_matches_tie_at_baseline() {
        let result = score("Shocking result, according to officials");
        assert_eq!((result.suspicious, result.credible), (1, 1));
        assert_eq!(result.verdict, Verdict::Real);
        assert_eq!(result.confidence, 78);
    }

    #[test]
    fn confidence_is_capped() {
        let text = SUSPICIOUS_PHRASES.join(" ");
        let result = score(&text);
        assert_eq!(result.verdict, Verdict::Fake);
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn single_excess_hit_steps_once() {
        let result = score("This is shocking");
        assert_eq!(result.verdict, Verdict::Fake);
        assert_eq!(result.confidence, 80);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score("CONSPIRACY").suspicious, 1);
    }

    #[test]
    fn indicators_follow_counts() {
        let text = "According to the institute, on 12/05 \"it works\"";
        let result = score(text);
        let llm = result.indicators(text);
        let factual = llm.factual_indicators.unwrap();
        assert_eq!(factual.claims_verifiable, Some(true));
        assert_eq!(factual.specific_dates, Some(true));
        assert_eq!(factual.quotes_attributed, Some(true));
        let source = llm.source_indicators.unwrap();
        assert_eq!(source.authority_claims, Some(0.4));
    }

    #[rstest]
    #[case("in 2024 the", true)]
    #[case("on 3/4 we", true)]
    #[case("no digits", false)]
    #[case("room 101", false)]
    fn date_detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(has_date_like(text), expected);
    }
}
