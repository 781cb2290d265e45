//! Verdict, modality, and connectivity enums for Verity.
//!
//! `ConnectivityState` is a three-state machine with a single transition
//! function, [`ConnectivityState::transition`]. Request routing reads the
//! current state through [`ConnectivityState::routes_remote`] instead of
//! branching on raw state values at each call site.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Output label assigned to analyzed content.
///
/// `Uncertain` is what the backend answers on its degraded paths (models not
/// loaded, low-confidence LLM output, internal fallback). The local
/// strategies only ever produce `Real` or `Fake`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Real,
    Fake,
    Uncertain,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "REAL",
            Self::Fake => "FAKE",
            Self::Uncertain => "UNCERTAIN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Modality
// ---------------------------------------------------------------------------

/// Input modality of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Text,
    Url,
    Image,
}

impl Modality {
    pub const ALL: [Self; 3] = [Self::Text, Self::Url, Self::Image];

    /// Path segment of the backend endpoint (`/analyze/{segment}`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Image => "image",
        }
    }

    /// Stable index for per-modality bookkeeping arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Text => 0,
            Self::Url => 1,
            Self::Image => 2,
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConnectivityState
// ---------------------------------------------------------------------------

/// Observations fed into the connectivity state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    /// The dashboard was (re)activated.
    Activated,
    /// A probe got a success response whose body reports `healthy`.
    ProbeHealthy,
    /// A probe got a non-success response, or a body reporting anything else.
    ProbeUnhealthy,
    /// Every probe attempt of a cycle timed out or failed in transport.
    ProbeUnreachable,
}

/// Reachability of the remote analysis backend.
///
/// ```text
/// any ──Activated──────────→ checking
/// any ──ProbeHealthy───────→ online
/// any ──ProbeUnhealthy─────→ offline
/// any ──ProbeUnreachable───→ offline
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityState {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ConnectivityState {
    /// Next state after observing `event`.
    #[must_use]
    pub const fn transition(self, event: ConnectivityEvent) -> Self {
        match event {
            ConnectivityEvent::Activated => Self::Checking,
            ConnectivityEvent::ProbeHealthy => Self::Online,
            ConnectivityEvent::ProbeUnhealthy | ConnectivityEvent::ProbeUnreachable => {
                Self::Offline
            }
        }
    }

    /// Whether analysis requests go to the remote backend in this state.
    #[must_use]
    pub const fn routes_remote(self) -> bool {
        matches!(self, Self::Online)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// Status line shown next to the indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Online => "Connected",
            Self::Offline => "Offline",
        }
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
