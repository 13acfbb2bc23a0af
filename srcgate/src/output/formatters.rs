//! Output formatter implementations.

use crate::ingest::IngestionResult;
use crate::{Error, Result};

use super::{OutputFormatter, Report};

/// Formatter for JSON output.
pub struct JsonFormatter {
    show_content: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    #[must_use]
    pub const fn new(show_content: bool) -> Self {
        Self { show_content }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &IngestionResult) -> Result<String> {
        serde_json::to_string_pretty(&Report::new(result, self.show_content)).map_err(|e| {
            Error::Validation {
                field: "json_output".to_string(),
                message: format!("failed to serialize to JSON: {e}"),
            }
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter {
    show_content: bool,
}

impl YamlFormatter {
    /// Create a new YAML formatter.
    #[must_use]
    pub const fn new(show_content: bool) -> Self {
        Self { show_content }
    }
}

impl OutputFormatter for YamlFormatter {
    fn format(&self, result: &IngestionResult) -> Result<String> {
        Ok(serde_yaml::to_string(&Report::new(
            result,
            self.show_content,
        ))?)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter {
    show_content: bool,
}

impl HumanFormatter {
    /// Create a new human-readable formatter.
    #[must_use]
    pub const fn new(show_content: bool) -> Self {
        Self { show_content }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, result: &IngestionResult) -> Result<String> {
        if !result.success {
            return Ok("Ingestion failed.".to_string());
        }

        let mut lines = Vec::new();

        if result.base_path.is_empty() {
            lines.push("Base path: (none)".to_string());
        } else {
            lines.push(format!("Base path: {}", result.base_path));
        }

        if result.sources.is_empty() {
            lines.push("No sources read.".to_string());
        } else {
            lines.push(format!("Sources ({}):", result.sources.len()));
            for (name, bytes) in &result.sources {
                lines.push(format!("  {name} ({} bytes)", bytes.len()));
            }
        }

        if !result.allowed_directories.is_empty() {
            lines.push(format!(
                "Allowed directories ({}):",
                result.allowed_directories.len()
            ));
            for dir in &result.allowed_directories {
                lines.push(format!("  {}", dir.display()));
            }
        }

        if !result.remappings.is_empty() {
            lines.push("Remappings:".to_string());
            for remapping in &result.remappings {
                lines.push(format!("  {remapping}"));
            }
        }

        if self.show_content {
            for (name, bytes) in &result.sources {
                lines.push(String::new());
                lines.push(format!("==> {name} <=="));
                lines.push(String::from_utf8_lossy(bytes).trim_end().to_string());
            }
        }

        Ok(lines.join("\n"))
    }
}
