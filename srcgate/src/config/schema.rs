//! Configuration schema definitions.
//!
//! Every field is optional so that layers can be merged: a field left out
//! of a file inherits the value from a lower-precedence layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ingest::{IngestOptions, InputMode};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use srcgate::config::{Config, OutputFormat};
/// use srcgate::ingest::InputMode;
///
/// let config: Config = serde_yaml::from_str(
///     "base_path: contracts\nmode: standard-json\noutput_format: json\n",
/// ).unwrap();
///
/// assert_eq!(config.base_path.as_deref(), Some("contracts"));
/// assert_eq!(config.mode, Some(InputMode::StandardJson));
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory source unit names are made relative to.
    pub base_path: Option<String>,

    /// Skip missing inputs with a warning instead of failing.
    pub ignore_missing: Option<bool>,

    /// Input mode.
    pub mode: Option<InputMode>,

    /// Import remappings in `[context:]prefix=target` form.
    #[serde(default)]
    pub remappings: Option<Vec<String>>,

    /// Output format for ingestion results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults, the lowest configuration layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::config::{Config, OutputFormat};
    /// use srcgate::ingest::InputMode;
    ///
    /// let defaults = Config::defaults();
    /// assert_eq!(defaults.mode, Some(InputMode::Compiler));
    /// assert_eq!(defaults.ignore_missing, Some(false));
    /// assert_eq!(defaults.output_format, Some(OutputFormat::Human));
    /// assert!(defaults.base_path.is_none());
    /// ```
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            base_path: None,
            ignore_missing: Some(false),
            mode: Some(InputMode::Compiler),
            remappings: None,
            output_format: Some(OutputFormat::Human),
        }
    }

    /// The effective input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode.unwrap_or_default()
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Build ingestion options for `inputs` from this configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::config::Config;
    ///
    /// let config = Config {
    ///     ignore_missing: Some(true),
    ///     remappings: Some(vec!["lib=vendor/lib/".to_string()]),
    ///     ..Config::defaults()
    /// };
    ///
    /// let options = config.ingest_options(vec!["a.sol".to_string()]);
    /// assert!(options.ignore_missing);
    /// assert_eq!(options.remappings, vec!["lib=vendor/lib/".to_string()]);
    /// ```
    #[must_use]
    pub fn ingest_options(&self, inputs: Vec<String>) -> IngestOptions {
        IngestOptions::new(inputs)
            .with_ignore_missing(self.ignore_missing.unwrap_or(false))
            .with_mode(self.mode())
            .with_base_path(self.base_path.clone())
            .with_remappings(self.remappings.clone().unwrap_or_default())
    }
}

/// Output format for ingestion results.
///
/// # Examples
///
/// ```
/// use srcgate::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON output format.
    Json,
    /// YAML output format.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{other}' (expected human, json or yaml)"),
            }),
        }
    }
}
