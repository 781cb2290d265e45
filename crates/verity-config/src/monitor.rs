//! Connectivity monitor timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_probe_timeout_secs() -> u64 {
    5
}

const fn default_retry_attempts() -> u32 {
    2
}

const fn default_retry_delay_secs() -> u64 {
    2
}

const fn default_interval_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Bound on a single `/health` request.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Attempts made after the first one fails in transport.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Fixed delay between attempts.
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Period between probe cycles.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: default_probe_timeout_secs(),
            retry_attempts: default_retry_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl MonitorConfig {
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero probe timeout or interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.probe_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.interval_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
