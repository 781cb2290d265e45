//! Analysis error types.

use thiserror::Error;
use verity_client::ClientError;
use verity_core::CoreError;

/// Failures of an online-path analysis. Surfaced to the user; the result is
/// discarded and history is left untouched.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Transport failure, timeout, non-success status, or undecodable body.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The backend answered with a structurally valid but unusable body.
    #[error("malformed analysis response: {0}")]
    Malformed(#[from] CoreError),

    /// The dashboard was torn down before the submission started.
    #[error("dashboard has been torn down")]
    TornDown,
}
