//! Ingestion results.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::path::SourceUnitName;
use crate::remapping::RemappingTable;
use crate::sandbox::SandboxDirectorySet;

/// Terminal state of one raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputState {
    /// Read from standard input.
    Stdin,
    /// Found, named and read.
    Resolved,
    /// Missing and skipped because missing inputs are ignored.
    Skipped,
    /// Caused the run to fail.
    FatalInvalid,
}

/// What happened to one raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOutcome {
    /// The argument exactly as given, or `-` for stdin.
    pub input: String,
    /// Its terminal state.
    pub state: InputState,
    /// The name its content is stored under, when it was read.
    pub source_unit_name: Option<SourceUnitName>,
}

/// A non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestWarning {
    /// A missing input was skipped.
    Skipped {
        /// The argument exactly as given.
        path: String,
    },
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped { path } => write!(f, "\"{path}\" is not found. Skipping."),
        }
    }
}

/// The outcome of an ingestion run.
///
/// On failure `sources` and `allowed_directories` are empty; `warnings`
/// still holds everything emitted before the fatal error.
#[derive(Debug, Clone, Default)]
pub struct IngestionResult {
    /// Whether ingestion succeeded.
    pub success: bool,

    /// Content keyed by source unit name.
    pub sources: BTreeMap<SourceUnitName, Vec<u8>>,

    /// Directories later import resolution may read from.
    pub allowed_directories: SandboxDirectorySet,

    /// Warning lines in emission order.
    pub warnings: Vec<String>,

    /// The single fatal line, if ingestion failed.
    pub fatal_error: Option<String>,

    /// The normalized base path in effect, empty when none.
    pub base_path: String,

    /// Remappings in the order they were given.
    pub remappings: RemappingTable,

    /// Terminal state of every input processed, in order.
    pub outcomes: Vec<InputOutcome>,
}

impl IngestionResult {
    /// Build a failed result from a fatal error and the diagnostics so far.
    #[must_use]
    pub fn failure(
        error: &Error,
        warnings: Vec<String>,
        outcomes: Vec<InputOutcome>,
        base_path: String,
    ) -> Self {
        Self {
            success: false,
            warnings,
            fatal_error: Some(error.to_string()),
            base_path,
            outcomes,
            ..Self::default()
        }
    }

    /// Every diagnostic line in emission order: the warnings, then the
    /// fatal error if there is one.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.warnings
            .iter()
            .map(String::as_str)
            .chain(self.fatal_error.as_deref())
    }

    /// Content stored under `name`.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&[u8]> {
        self.sources.get(name).map(Vec::as_slice)
    }

    /// Number of inputs in the given state.
    #[must_use]
    pub fn count(&self, state: InputState) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.state == state)
            .count()
    }
}
