//! Wire types for the remote analysis backend.
//!
//! Every nested analysis field is optional: a response carrying only
//! `verdict` and `confidence` must still decode. Unknown fields are ignored,
//! and a display-only field holding a value of the wrong type decodes as
//! absent so the mapping fallbacks apply.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::Verdict;
use crate::errors::CoreError;

// ── Requests ───────────────────────────────────────────────────────

/// Body of `POST /analyze/text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysisBody {
    pub text: String,
    pub title: String,
}

/// Body of `POST /analyze/url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAnalysisBody {
    pub url: String,
}

/// Body of `POST /analyze/image`; `image_data` is base64 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysisBody {
    pub image_data: String,
}

// ── Lenient field decoding ─────────────────────────────────────────

/// Optional field that decodes as `None` on a type mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Nested block that decodes as `T::default()` on a type mismatch.
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

// ── Responses ──────────────────────────────────────────────────────

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub models_loaded: Option<bool>,
}

impl HealthResponse {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of `POST /analyze/{text,url,image}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub verdict: Verdict,
    /// Probability-like score in `[0, 1]`.
    pub confidence: f64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub analysis: AnalysisDetail,
    #[serde(default, deserialize_with = "lenient")]
    pub factors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub recommendations: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<String>,
}

impl AnalysisResponse {
    /// Confidence as a 0-100 percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfidence`] when the confidence is not a
    /// finite number in `[0, 1]`.
    pub fn confidence_percent(&self) -> Result<u8, CoreError> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(CoreError::InvalidConfidence(self.confidence));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok((self.confidence * 100.0).round() as u8)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetail {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub llm_analysis: Option<LlmAnalysis>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment_analysis: Option<SentimentAnalysis>,
    /// OCR output for image requests.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub extracted_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmAnalysis {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub factual_indicators: Option<FactualIndicators>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_indicators: Option<SourceIndicators>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub linguistic_indicators: Option<LinguisticIndicators>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactualIndicators {
    #[serde(default, deserialize_with = "lenient")]
    pub claims_verifiable: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub specific_dates: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub named_sources: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub quotes_attributed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceIndicators {
    #[serde(default, deserialize_with = "lenient")]
    pub authority_claims: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub conspiracy_theory_language: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub unverified_claims: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinguisticIndicators {
    #[serde(default, deserialize_with = "lenient")]
    pub emotional_language: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub exaggeration: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub clickbait_elements: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    #[serde(default, deserialize_with = "lenient")]
    pub sentiment: Option<SentimentScores>,
}

/// VADER-style sentiment scores; `compound` lies in `[-1, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(default, deserialize_with = "lenient")]
    pub compound: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub pos: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub neu: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub neg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL_FIXTURE: &str = r#"{
        "verdict": "FAKE",
        "confidence": 0.87,
        "analysis": {
            "llm_analysis": {
                "verdict": "FAKE",
                "confidence": 0.87,
                "factual_indicators": {
                    "claims_verifiable": false,
                    "specific_dates": true,
                    "named_sources": false,
                    "quotes_attributed": false
                },
                "source_indicators": {
                    "authority_claims": 0.0,
                    "conspiracy_theory_language": 0.6,
                    "unverified_claims": 0.4
                },
                "key_factors": ["Enhanced pattern analysis completed"]
            },
            "sentiment_analysis": {
                "sentiment": {"compound": -0.4, "pos": 0.1, "neu": 0.5, "neg": 0.4}
            },
            "source_type": "text",
            "text_length": 120,
            "word_count": 20
        },
        "factors": ["Found 2 suspicious indicators, 0 credible indicators"],
        "recommendations": ["Verify through fact-checking websites"],
        "timestamp": "2024-01-14T10:00:00"
    }"#;

    #[test]
    fn parse_full_response() {
        let resp: AnalysisResponse = serde_json::from_str(FULL_FIXTURE).unwrap();
        assert_eq!(resp.verdict, Verdict::Fake);
        let llm = resp.analysis.llm_analysis.as_ref().unwrap();
        assert_eq!(
            llm.factual_indicators.as_ref().unwrap().claims_verifiable,
            Some(false)
        );
        assert_eq!(
            llm.source_indicators.as_ref().unwrap().authority_claims,
            Some(0.0)
        );
        assert_eq!(
            resp.analysis
                .sentiment_analysis
                .as_ref()
                .and_then(|s| s.sentiment.as_ref())
                .and_then(|s| s.compound),
            Some(-0.4)
        );
        assert_eq!(resp.confidence_percent().unwrap(), 87);
    }

    #[test]
    fn parse_minimal_response() {
        let resp: AnalysisResponse =
            serde_json::from_str(r#"{"verdict": "REAL", "confidence": 0.5}"#).unwrap();
        assert_eq!(resp.analysis, AnalysisDetail::default());
        assert!(resp.factors.is_none());
        assert!(resp.recommendations.is_none());
    }

    #[test]
    fn wrong_typed_nested_fields_decode_as_absent() {
        let resp: AnalysisResponse = serde_json::from_str(
            r#"{
                "verdict": "UNCERTAIN",
                "confidence": 0.5,
                "analysis": {
                    "llm_analysis": {
                        "factual_indicators": {"claims_verifiable": "yes", "named_sources": true},
                        "source_indicators": {"authority_claims": "low"},
                        "linguistic_indicators": ["exaggeration"]
                    },
                    "sentiment_analysis": {"sentiment": {"compound": null, "pos": 0.2}},
                    "extracted_text": 42
                },
                "factors": "none",
                "timestamp": 1705226400
            }"#,
        )
        .unwrap();
        assert_eq!(resp.verdict, Verdict::Uncertain);
        let llm = resp.analysis.llm_analysis.as_ref().unwrap();
        let factual = llm.factual_indicators.as_ref().unwrap();
        assert_eq!(factual.claims_verifiable, None);
        assert_eq!(factual.named_sources, Some(true));
        assert_eq!(llm.source_indicators.as_ref().unwrap().authority_claims, None);
        assert!(llm.linguistic_indicators.is_none());
        let sentiment = resp
            .analysis
            .sentiment_analysis
            .as_ref()
            .and_then(|s| s.sentiment.as_ref())
            .unwrap();
        assert_eq!(sentiment.compound, None);
        assert_eq!(sentiment.pos, Some(0.2));
        assert!(resp.analysis.extracted_text.is_none());
        assert!(resp.factors.is_none());
        assert!(resp.timestamp.is_none());
    }

    #[test]
    fn non_object_analysis_block_is_defaulted() {
        let resp: AnalysisResponse = serde_json::from_str(
            r#"{"verdict": "REAL", "confidence": 0.7, "analysis": "unavailable"}"#,
        )
        .unwrap();
        assert_eq!(resp.analysis, AnalysisDetail::default());
    }

    #[test]
    fn missing_verdict_fails() {
        assert!(serde_json::from_str::<AnalysisResponse>(r#"{"confidence": 0.5}"#).is_err());
    }

    #[test]
    fn confidence_out_of_range_is_rejected() {
        let mut resp: AnalysisResponse =
            serde_json::from_str(r#"{"verdict": "REAL", "confidence": 1.5}"#).unwrap();
        assert_eq!(
            resp.confidence_percent(),
            Err(CoreError::InvalidConfidence(1.5))
        );
        resp.confidence = f64::NAN;
        assert!(resp.confidence_percent().is_err());
    }

    #[test]
    fn health_status_check() {
        let healthy: HealthResponse =
            serde_json::from_str(r#"{"status": "healthy", "models_loaded": false}"#).unwrap();
        assert!(healthy.is_healthy());
        let degraded: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!degraded.is_healthy());
    }

    #[test]
    fn image_body_serializes_field_name() {
        let body = ImageAnalysisBody {
            image_data: "aGk=".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"image_data":"aGk="}"#
        );
    }
}
