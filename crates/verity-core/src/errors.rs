//! Cross-cutting error types for Verity.
//!
//! Domain-specific errors (`ConfigError`, `ClientError`, `AnalysisError`) are
//! defined in their respective crates. The binary converges them with `anyhow`.

use thiserror::Error;

use crate::enums::Modality;

/// Errors that can be raised by any Verity crate.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// The submitted input was empty, whitespace-only, or absent.
    #[error("Empty {0} input")]
    EmptyInput(Modality),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend reported a confidence outside `[0, 1]`.
    #[error("Confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
}
