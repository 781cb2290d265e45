//! # verity-core
//!
//! Core types and error types for Verity.
//!
//! This crate provides the foundational types shared across all Verity crates:
//! - Verdict, modality, and connectivity enums (with the connectivity state machine)
//! - Analysis requests as submitted from the dashboard
//! - The canonical analysis result view-model and history entries
//! - Wire types for the remote analysis backend JSON
//! - Sign-up form validation and the user profile it produces
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod request;
pub mod result;
pub mod signup;
pub mod wire;

pub use enums::{ConnectivityEvent, ConnectivityState, Modality, Verdict};
pub use errors::CoreError;
pub use request::AnalysisRequest;
pub use result::{AnalysisResult, HistoryEntry, Origin, Subscores};
pub use signup::{FieldError, SignUpForm, UserProfile};
