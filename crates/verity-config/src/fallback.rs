//! Synthetic fallback result configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How results are synthesized when the backend is not reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// Deterministic keyword counting over the input text.
    #[default]
    Heuristic,
    /// Uniformly random verdicts and scores with per-modality bias.
    Random,
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heuristic => "heuristic",
            Self::Random => "random",
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub strategy: FallbackStrategy,
}
