//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SRCGATE_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Base path override.
pub const ENV_BASE_PATH: &str = "SRCGATE_BASE_PATH";
/// Ignore-missing override.
pub const ENV_IGNORE_MISSING: &str = "SRCGATE_IGNORE_MISSING";
/// Input mode override.
pub const ENV_MODE: &str = "SRCGATE_MODE";
/// Output format override.
pub const ENV_OUTPUT_FORMAT: &str = "SRCGATE_OUTPUT_FORMAT";
/// Extra remappings, comma separated.
pub const ENV_REMAPPINGS: &str = "SRCGATE_REMAPPINGS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use srcgate::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown mode, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::config::{Config, EnvironmentConfig};
    ///
    /// let mut config = Config::default();
    /// EnvironmentConfig::apply_from(&mut config, |name| match name {
    ///     "SRCGATE_IGNORE_MISSING" => Some("yes".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.ignore_missing, Some(true));
    /// ```
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_path) = lookup(ENV_BASE_PATH) {
            config.base_path = Some(base_path);
        }

        if let Some(val) = lookup(ENV_IGNORE_MISSING) {
            config.ignore_missing = Some(Self::parse_bool(ENV_IGNORE_MISSING, &val)?);
        }

        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = Some(mode.parse().map_err(|_| Error::Validation {
                field: ENV_MODE.into(),
                message: format!("Invalid mode: '{mode}' (expected compiler/standard-json)"),
            })?);
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(format.parse().map_err(|_| Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message: format!("Invalid output format: '{format}' (expected human/json/yaml)"),
            })?);
        }

        if let Some(remappings) = lookup(ENV_REMAPPINGS) {
            let parsed = Self::parse_list(&remappings);
            match &mut config.remappings {
                Some(existing) => existing.extend(parsed),
                None => config.remappings = Some(parsed),
            }
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Split a comma-separated list, trimming entries and dropping empty ones.
    fn parse_list(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
