//! Configuration merging and precedence handling.
//!
//! Scalar fields are overridden by higher layers; `remappings` accumulate
//! across layers, lowest first.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use srcgate::config::{Config, ConfigMerger};
///
/// let low = Config { base_path: Some("low".to_string()), ..Default::default() };
/// let high = Config { base_path: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_path, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources on top of the built-in defaults.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::defaults();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Remappings: accumulated, target's entries first
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_path.is_some() {
            target.base_path.clone_from(&source.base_path);
        }

        if source.ignore_missing.is_some() {
            target.ignore_missing = source.ignore_missing;
        }

        if source.mode.is_some() {
            target.mode = source.mode;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_remappings) = source.remappings {
            match &mut target.remappings {
                Some(target_remappings) => {
                    target_remappings.extend(source_remappings.iter().cloned());
                }
                None => {
                    target.remappings.clone_from(&source.remappings);
                }
            }
        }
    }
}
