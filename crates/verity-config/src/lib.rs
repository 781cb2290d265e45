//! # verity-config
//!
//! Layered configuration loading for Verity using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITY_*` prefix, `__` as separator)
//! 2. Project-level `.verity/config.toml`
//! 3. User-level `~/.config/verity/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VERITY_BACKEND__BASE_URL` -> `backend.base_url`,
//! `VERITY_MONITOR__INTERVAL_SECS` -> `monitor.interval_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use verity_config::VerityConfig;
//!
//! let config = VerityConfig::load_with_dotenv().expect("config");
//! println!("Backend: {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod fallback;
mod monitor;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use fallback::{FallbackConfig, FallbackStrategy};
pub use monitor::MonitorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerityConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

impl VerityConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".verity/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VERITY_").split("__"))
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()?;
        self.monitor.validate()
    }

    /// Whether every section holds usable values.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verity").join("config.toml"))
    }
}
