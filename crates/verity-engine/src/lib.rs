//! # verity-engine
//!
//! Decision logic of the Verity dashboard.
//!
//! - [`ConnectivityMonitor`]: periodic health probing into a
//!   `checking`/`online`/`offline` state
//! - [`AnalysisBackend`]: remote and synthetic analysis strategies
//! - [`mapping`]: backend response to [`verity_core::AnalysisResult`]
//! - [`Dashboard`]: validation, routing, in-flight guarding and history for
//!   one session
//! - Session context, text reports and history analytics

pub mod analytics;
pub mod backend;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod mapping;
pub mod monitor;
pub mod probe;
pub mod report;
pub mod session;

pub use analytics::AnalyticsSummary;
pub use backend::{AnalysisBackend, RemoteBackend, SyntheticBackend};
pub use dashboard::{Dashboard, SkipReason, Submission};
pub use error::AnalysisError;
pub use history::History;
pub use monitor::{ConnectivityMonitor, MonitorTiming};
pub use probe::{BackendProbe, HealthProbe, ProbeAttempt};
pub use session::SessionContext;
