//! Analysis backends: one strategy interface, two implementations.
//!
//! [`RemoteBackend`] forwards requests to the HTTP backend and can fail.
//! [`SyntheticBackend`] fabricates a response locally and never fails. Both
//! return the same wire shape, so response mapping is unaware of which one ran.

mod heuristic;
mod random;
mod remote;
mod synthetic;

pub use heuristic::{CREDIBLE_PHRASES, HeuristicScore, SUSPICIOUS_PHRASES, score};
pub use remote::RemoteBackend;
pub use synthetic::SyntheticBackend;

use async_trait::async_trait;
use verity_core::{AnalysisRequest, wire::AnalysisResponse};

use crate::error::AnalysisError;

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Issue exactly one analysis for `request` and return the raw response.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, AnalysisError>;
}
