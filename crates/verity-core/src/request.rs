//! Analysis requests as submitted from the dashboard.

use crate::enums::Modality;
use crate::errors::CoreError;

/// One submission for one input modality. Consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Free text; `title` is derived from the first line of `body`.
    Text { body: String, title: String },
    /// Address of an article to analyze.
    Url { address: String },
    /// Raw image bytes plus the original file name.
    Image { bytes: Vec<u8>, filename: String },
}

impl AnalysisRequest {
    /// Build a text request, deriving the title from the first line.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        let body = body.into();
        let title = body.lines().next().unwrap_or_default().trim().to_string();
        Self::Text { body, title }
    }

    #[must_use]
    pub fn url(address: impl Into<String>) -> Self {
        Self::Url {
            address: address.into(),
        }
    }

    #[must_use]
    pub fn image(bytes: Vec<u8>, filename: impl Into<String>) -> Self {
        Self::Image {
            bytes,
            filename: filename.into(),
        }
    }

    #[must_use]
    pub const fn modality(&self) -> Modality {
        match self {
            Self::Text { .. } => Modality::Text,
            Self::Url { .. } => Modality::Url,
            Self::Image { .. } => Modality::Image,
        }
    }

    /// Reject empty or whitespace-only text and URLs, and absent images.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyInput`] naming the modality.
    pub fn validate(&self) -> Result<(), CoreError> {
        let empty = match self {
            Self::Text { body, .. } => body.trim().is_empty(),
            Self::Url { address } => address.trim().is_empty(),
            Self::Image { bytes, filename } => bytes.is_empty() || filename.trim().is_empty(),
        };
        if empty {
            Err(CoreError::EmptyInput(self.modality()))
        } else {
            Ok(())
        }
    }

    /// Text fed to keyword heuristics: body and title, the address, or the file name.
    #[must_use]
    pub fn heuristic_text(&self) -> String {
        match self {
            Self::Text { body, title } => format!("{body} {title}"),
            Self::Url { address } => address.clone(),
            Self::Image { filename, .. } => filename.clone(),
        }
    }
}
