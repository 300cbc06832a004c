//! Designation defaults.

use estrich_core::IntendedUse;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_intended_use() -> String {
    IntendedUse::UnderFlooring.as_str().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DesignationConfig {
    /// Intended use assumed by requirement checks (`wearing_surface`,
    /// `under_flooring`).
    #[serde(default = "default_intended_use")]
    pub intended_use: String,
}

impl DesignationConfig {
    /// Parsed intended use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown intended use.
    pub fn intended_use(&self) -> Result<IntendedUse, ConfigError> {
        self.intended_use
            .parse()
            .map_err(|error: estrich_core::CoreError| ConfigError::InvalidValue {
                field: "designation.intended_use".to_string(),
                reason: error.to_string(),
            })
    }
}

impl Default for DesignationConfig {
    fn default() -> Self {
        Self {
            intended_use: default_intended_use(),
        }
    }
}
