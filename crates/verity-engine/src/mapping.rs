//! Backend response → view-model mapping.
//!
//! Each field takes the first usable source, else a fixed fallback. Only
//! `verdict` and `confidence` are required; a response missing every nested
//! analysis field maps to the fallback constants.

use chrono::NaiveDate;
use verity_core::{
    AnalysisRequest, AnalysisResult, CoreError, Modality, Origin, Subscores,
    wire::AnalysisResponse,
};

pub const FACTUAL_ACCURACY_VERIFIABLE: u8 = 85;
pub const FACTUAL_ACCURACY_FALLBACK: u8 = 70;
pub const SOURCE_CREDIBILITY_AUTHORITATIVE: u8 = 80;
pub const SOURCE_CREDIBILITY_FALLBACK: u8 = 65;
pub const SENTIMENT_BIAS_FALLBACK: u8 = 60;
pub const LINGUISTIC_PATTERNS: u8 = 75;

/// Authority-claim strength at or above which sources count as authoritative.
pub const AUTHORITY_THRESHOLD: f64 = 0.2;

pub const DEFAULT_RECOMMENDATION: &str = "Verify with additional sources";
pub const DEFAULT_EXTRACTED_TEXT: &str = "Text extracted from image";

const fn default_factor(modality: Modality) -> &'static str {
    match modality {
        Modality::Text => "Analysis completed",
        Modality::Url => "URL analysis completed",
        Modality::Image => "Image analysis completed",
    }
}

/// Map `response` for `request` into the canonical result.
///
/// # Errors
///
/// Returns [`CoreError::InvalidConfidence`] when the confidence is not in `[0, 1]`.
pub fn map_response(
    response: &AnalysisResponse,
    request: &AnalysisRequest,
    captured_at: NaiveDate,
) -> Result<AnalysisResult, CoreError> {
    let modality = request.modality();
    Ok(AnalysisResult {
        verdict: response.verdict,
        confidence_score: response.confidence_percent()?,
        subscores: subscores(response),
        factors: non_empty_or(response.factors.as_deref(), default_factor(modality)),
        recommendations: non_empty_or(
            response.recommendations.as_deref(),
            DEFAULT_RECOMMENDATION,
        ),
        captured_at,
        origin: origin(request, response),
    })
}

/// Subscore breakdown with documented fallbacks.
#[must_use]
pub fn subscores(response: &AnalysisResponse) -> Subscores {
    let llm = response.analysis.llm_analysis.as_ref();

    let claims_verifiable = llm
        .and_then(|l| l.factual_indicators.as_ref())
        .and_then(|f| f.claims_verifiable);
    let authority = llm
        .and_then(|l| l.source_indicators.as_ref())
        .and_then(|s| s.authority_claims);
    let compound = response
        .analysis
        .sentiment_analysis
        .as_ref()
        .and_then(|s| s.sentiment.as_ref())
        .and_then(|s| s.compound);

    Subscores {
        factual_accuracy: if claims_verifiable == Some(true) {
            FACTUAL_ACCURACY_VERIFIABLE
        } else {
            FACTUAL_ACCURACY_FALLBACK
        },
        source_credibility: match authority {
            Some(strength) if strength >= AUTHORITY_THRESHOLD => SOURCE_CREDIBILITY_AUTHORITATIVE,
            _ => SOURCE_CREDIBILITY_FALLBACK,
        },
        sentiment_bias: compound
            .filter(|c| c.is_finite())
            .map_or(SENTIMENT_BIAS_FALLBACK, sentiment_to_percent),
        linguistic_patterns: LINGUISTIC_PATTERNS,
    }
}

/// Linear remap of a compound score in `[-1, 1]` onto `[0, 100]`.
#[must_use]
pub fn sentiment_to_percent(compound: f64) -> u8 {
    let scaled = ((1.0 + compound.clamp(-1.0, 1.0)) * 50.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = scaled as u8;
    percent
}

fn non_empty_or(items: Option<&[String]>, fallback: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec![fallback.to_string()],
    }
}

fn origin(request: &AnalysisRequest, response: &AnalysisResponse) -> Origin {
    match request {
        AnalysisRequest::Text { body, .. } => Origin::Text {
            content: body.clone(),
        },
        AnalysisRequest::Url { address } => Origin::Url {
            address: address.trim().to_string(),
        },
        AnalysisRequest::Image { filename, .. } => Origin::Image {
            filename: filename.clone(),
            extracted_text: Some(
                response
                    .analysis
                    .extracted_text
                    .clone()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_EXTRACTED_TEXT.to_string()),
            ),
        },
    }
}
