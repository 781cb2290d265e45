//! Randomized offline results with a per-modality verdict bias.

use rand::Rng;
use verity_core::{
    Modality, Verdict,
    wire::{FactualIndicators, LinguisticIndicators, LlmAnalysis, SourceIndicators},
};

/// Draw ranges for one modality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomProfile {
    /// Probability of a `REAL` verdict.
    pub real_bias: f64,
    /// Inclusive-exclusive confidence percentage range.
    pub confidence: (u8, u8),
}

impl RandomProfile {
    #[must_use]
    pub const fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Text | Modality::Image => Self {
                real_bias: 0.5,
                confidence: (80, 100),
            },
            Modality::Url => Self {
                real_bias: 0.6,
                confidence: (75, 100),
            },
        }
    }
}

/// Verdict, confidence fraction, and indicators drawn from `rng`.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, modality: Modality) -> (Verdict, f64, LlmAnalysis) {
    let profile = RandomProfile::for_modality(modality);
    let verdict = if rng.gen_bool(profile.real_bias) {
        Verdict::Real
    } else {
        Verdict::Fake
    };
    let confidence = f64::from(rng.gen_range(profile.confidence.0..profile.confidence.1)) / 100.0;

    let indicators = LlmAnalysis {
        factual_indicators: Some(FactualIndicators {
            claims_verifiable: Some(rng.gen_bool(0.5)),
            specific_dates: Some(rng.gen_bool(0.5)),
            named_sources: Some(rng.gen_bool(0.5)),
            quotes_attributed: Some(rng.gen_bool(0.5)),
        }),
        source_indicators: Some(SourceIndicators {
            authority_claims: Some(rng.gen_range(0.0..1.0)),
            conspiracy_theory_language: Some(rng.gen_range(0.0..1.0)),
            unverified_claims: Some(rng.gen_range(0.0..1.0)),
        }),
        linguistic_indicators: Some(LinguisticIndicators {
            emotional_language: Some(rng.gen_range(0.0..1.0)),
            exaggeration: Some(rng.gen_range(0.0..1.0)),
            clickbait_elements: Some(rng.gen_range(0.0..1.0)),
        }),
    };
    (verdict, confidence, indicators)
}
