//! Output formatting module for ingestion results.
//!
//! This module renders an [`IngestionResult`] for people (a short text
//! summary) and for tools (JSON or YAML). Diagnostics are not part of the
//! rendered output; they go to stderr through the logger.

mod formatters;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::ingest::{InputOutcome, IngestionResult};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting ingestion results into different output formats.
pub trait OutputFormatter {
    /// Format the given result into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, result: &IngestionResult) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// With `show_content` the structured formats embed each source's text
    /// and the human format prints it below the summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::config::OutputFormat;
    /// use srcgate::IngestionResult;
    ///
    /// let formatter = OutputFormat::Json.create_formatter(false);
    /// let text = formatter.format(&IngestionResult::default()).unwrap();
    /// assert!(text.contains("\"success\": false"));
    /// ```
    #[must_use]
    pub fn create_formatter(self, show_content: bool) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter::new(show_content)),
            Self::Json => Box::new(JsonFormatter::new(show_content)),
            Self::Yaml => Box::new(YamlFormatter::new(show_content)),
        }
    }
}

/// Serializable view of one source.
#[derive(Debug, Serialize)]
struct SourceEntry<'a> {
    name: &'a str,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

/// Serializable view of an [`IngestionResult`] shared by JSON and YAML.
#[derive(Debug, Serialize)]
struct Report<'a> {
    success: bool,
    base_path: &'a str,
    sources: Vec<SourceEntry<'a>>,
    allowed_directories: Vec<String>,
    remappings: Vec<String>,
    warnings: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    fatal_error: Option<&'a str>,
    inputs: &'a [InputOutcome],
}

impl<'a> Report<'a> {
    fn new(result: &'a IngestionResult, show_content: bool) -> Self {
        Self {
            success: result.success,
            base_path: &result.base_path,
            sources: result
                .sources
                .iter()
                .map(|(name, bytes)| SourceEntry {
                    name: name.as_str(),
                    size: bytes.len(),
                    content: show_content.then(|| String::from_utf8_lossy(bytes).into_owned()),
                })
                .collect(),
            allowed_directories: result
                .allowed_directories
                .iter()
                .map(|dir| dir.display().to_string())
                .collect(),
            remappings: result.remappings.iter().map(ToString::to_string).collect(),
            warnings: &result.warnings,
            fatal_error: result.fatal_error.as_deref(),
            inputs: &result.outcomes,
        }
    }
}
