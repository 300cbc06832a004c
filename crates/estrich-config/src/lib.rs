//! # estrich-config
//!
//! Layered configuration loading for the `estrich` tooling using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ESTRICH_*` prefix, `__` as separator)
//! 2. An explicit file passed via `--config`
//! 3. Project-level `.estrich/config.toml`
//! 4. User-level `~/.config/estrich/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ESTRICH_GENERAL__DEFAULT_FORMAT` -> `general.default_format`,
//! `ESTRICH_EVALUATION__FAIL_ON_NONCONFORMITY` -> `evaluation.fail_on_nonconformity`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use estrich_config::EstrichConfig;
//!
//! let config = EstrichConfig::load_with_dotenv(None).expect("config");
//! if config.evaluation.fail_on_nonconformity {
//!     println!("strict mode");
//! }
//! ```

mod designation;
mod error;
mod evaluation;
mod general;

pub use designation::DesignationConfig;
pub use error::ConfigError;
pub use evaluation::EvaluationConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EstrichConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub designation: DesignationConfig,
}

impl EstrichConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` if `explicit` does not exist,
    /// `ConfigError::Figment` on parse failures, and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".estrich/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("ESTRICH_").split("__"))
    }

    /// Check values that serde accepts but the tooling does not.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.general.validate()?;
        self.designation.intended_use()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("estrich").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EstrichConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.evaluation.fail_on_nonconformity);
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = EstrichConfig::load(Some(Path::new("/nonexistent/estrich.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }
}
