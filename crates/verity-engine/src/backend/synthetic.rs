use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use verity_config::FallbackStrategy;
use verity_core::{
    AnalysisRequest, Modality,
    wire::{AnalysisDetail, AnalysisResponse, LlmAnalysis, SentimentAnalysis, SentimentScores},
};

use super::{AnalysisBackend, heuristic, random};
use crate::error::AnalysisError;

/// OCR placeholder attached to offline image results.
pub const OFFLINE_EXTRACTED_TEXT: &str = "Sample extracted text from image (mock data)";

/// Builds responses locally so the dashboard keeps working offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticBackend {
    strategy: FallbackStrategy,
}

impl SyntheticBackend {
    #[must_use]
    pub const fn new(strategy: FallbackStrategy) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub const fn strategy(&self) -> FallbackStrategy {
        self.strategy
    }

    /// Synthesize a backend-shaped response for `request`.
    #[must_use]
    pub fn respond(&self, request: &AnalysisRequest) -> AnalysisResponse {
        match self.strategy {
            FallbackStrategy::Heuristic => heuristic_response(request),
            FallbackStrategy::Random => random_response(request),
        }
    }
}

#[async_trait]
impl AnalysisBackend for SyntheticBackend {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError> {
        Ok(self.respond(request))
    }
}

fn heuristic_response(request: &AnalysisRequest) -> AnalysisResponse {
    let text = request.heuristic_text();
    let score = heuristic::score(&text);
    let verdict = score.verdict;

    AnalysisResponse {
        verdict,
        confidence: f64::from(score.confidence) / 100.0,
        analysis: detail(request, score.indicators(&text), 0.1),
        factors: Some(vec![
            "Offline mode: keyword pattern analysis completed".to_string(),
            format!(
                "Found {} suspicious indicators, {} credible indicators",
                score.suspicious, score.credible
            ),
            if score.suspicious >= 2 {
                "Multiple scam/hoax patterns detected".to_string()
            } else {
                "Standard content analysis".to_string()
            },
        ]),
        recommendations: Some(vec![
            "Cross-reference with multiple reliable sources".to_string(),
            "Check author credentials and publication date".to_string(),
            format!("Analysis suggests: {verdict} (offline mode)"),
        ]),
        timestamp: Some(Utc::now().to_rfc3339()),
    }
}

fn random_response(request: &AnalysisRequest) -> AnalysisResponse {
    let modality = request.modality();
    let (verdict, confidence, indicators, compound) = {
        let mut rng = rand::thread_rng();
        let (verdict, confidence, indicators) = random::draw(&mut rng, modality);
        let compound = rng.gen_range(-0.2..0.4);
        (verdict, confidence, indicators, compound)
    };

    let (factors, recommendations) = offline_notes(modality);
    AnalysisResponse {
        verdict,
        confidence,
        analysis: detail(request, indicators, compound),
        factors: Some(factors.iter().map(ToString::to_string).collect()),
        recommendations: Some(recommendations.iter().map(ToString::to_string).collect()),
        timestamp: Some(Utc::now().to_rfc3339()),
    }
}

fn detail(
    request: &AnalysisRequest,
    indicators: LlmAnalysis,
    compound: f64,
) -> AnalysisDetail {
    let modality = request.modality();
    AnalysisDetail {
        llm_analysis: Some(indicators),
        sentiment_analysis: Some(SentimentAnalysis {
            sentiment: Some(SentimentScores {
                compound: Some(compound),
                ..SentimentScores::default()
            }),
        }),
        extracted_text: (modality == Modality::Image).then(|| OFFLINE_EXTRACTED_TEXT.to_string()),
        source_type: Some(modality.as_str().to_string()),
    }
}

const fn offline_notes(modality: Modality) -> (&'static [&'static str], &'static [&'static str]) {
    match modality {
        Modality::Text => (
            &[
                "Content matches verified sources",
                "Author has established credibility",
                "Language patterns consistent with factual reporting",
            ],
            &[
                "API offline - using mock analysis",
                "Start backend server for real analysis",
            ],
        ),
        Modality::Url => (
            &[
                "Domain reputation analysis",
                "Content cross-verification",
                "API offline - using mock analysis",
            ],
            &[
                "Start backend server for real analysis",
                "Verify with additional sources",
            ],
        ),
        Modality::Image => (
            &[
                "OCR text extraction completed",
                "Image content analyzed",
                "API offline - using mock analysis",
            ],
            &[
                "Start backend server for real analysis",
                "Verify extracted text manually",
            ],
        ),
    }
}
