//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const FORMATS: [&str; 3] = ["json", "table", "raw"];
const COLOR_MODES: [&str; 3] = ["auto", "always", "never"];

fn default_format() -> String {
    "json".to_string()
}

fn default_color() -> String {
    "auto".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (json, table, raw).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Table coloring (auto, always, never).
    #[serde(default = "default_color")]
    pub color: String,
}

impl GeneralConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !FORMATS.contains(&self.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.default_format,
                    FORMATS.join(", ")
                ),
            });
        }
        if !COLOR_MODES.contains(&self.color.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.color".to_string(),
                reason: format!("'{}' is not one of {}", self.color, COLOR_MODES.join(", ")),
            });
        }
        Ok(())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            color: default_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "json");
        assert_eq!(config.color, "auto");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_format() {
        let config = GeneralConfig {
            default_format: "xml".to_string(),
            ..GeneralConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_format"));
    }
}
