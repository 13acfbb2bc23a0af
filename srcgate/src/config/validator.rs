//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::ingest::InputMode;
use crate::remapping::Remapping;

/// Validates configuration.
///
/// # Examples
///
/// ```
/// use srcgate::config::{Config, ConfigValidator};
///
/// let config = Config::defaults();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { remappings: Some(vec!["broken".to_string()]), ..Config::defaults() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if:
    /// - `base_path` is empty, blank or contains a null byte
    /// - an entry of `remappings` does not parse
    /// - `remappings` are given together with `mode: standard-json`
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref base_path) = config.base_path {
            Self::validate_base_path(base_path)?;
        }

        if let Some(ref remappings) = config.remappings {
            Self::validate_remappings(remappings)?;

            if config.mode == Some(InputMode::StandardJson) && !remappings.is_empty() {
                return Err(Error::Validation {
                    field: "remappings".into(),
                    message: "Remappings are not accepted in standard-json mode; \
                              put them under 'settings.remappings' in the JSON input"
                        .into(),
                });
            }
        }

        Ok(())
    }

    fn validate_base_path(base_path: &str) -> Result<()> {
        if base_path.trim().is_empty() {
            return Err(Error::Validation {
                field: "base_path".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if base_path.contains('\0') {
            return Err(Error::Validation {
                field: "base_path".into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        Ok(())
    }

    fn validate_remappings(remappings: &[String]) -> Result<()> {
        for (index, remapping) in remappings.iter().enumerate() {
            Remapping::parse(remapping).map_err(|e| Error::Validation {
                field: format!("remappings[{index}]"),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
