//! Ingestion planning.
//!
//! Planning classifies every raw argument and applies all checks that need
//! no filesystem access: remapping syntax, the Standard JSON remapping ban,
//! the Standard JSON input count and the implicit-stdin default. A plan
//! that builds successfully only fails later for reasons the filesystem
//! decides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize::normalize;
use crate::path::{BasePathResolver, NormalizedPath, WorkingDirectory};
use crate::remapping::Remapping;

/// The raw argument naming standard input.
pub const STDIN_ARGUMENT: &str = "-";

/// How the front end will use its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Any number of source files plus optional stdin.
    #[default]
    Compiler,
    /// A single JSON document from one file or stdin.
    StandardJson,
}

impl InputMode {
    /// The name used in configuration files and environment variables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compiler => "compiler",
            Self::StandardJson => "standard-json",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compiler" => Ok(Self::Compiler),
            "standard-json" | "standard_json" => Ok(Self::StandardJson),
            other => Err(Error::Validation {
                field: "mode".to_string(),
                message: format!("unknown input mode '{other}' (expected compiler or standard-json)"),
            }),
        }
    }
}

/// Options for one ingestion run.
///
/// # Examples
///
/// ```
/// use srcgate::ingest::{IngestOptions, InputMode};
///
/// let options = IngestOptions::new(vec!["a.sol".to_string(), "-".to_string()])
///     .with_ignore_missing(true)
///     .with_base_path(Some("contracts".to_string()));
///
/// assert_eq!(options.mode, InputMode::Compiler);
/// assert!(options.ignore_missing);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Raw arguments in command-line order, including `-` and remappings.
    pub inputs: Vec<String>,

    /// Downgrade missing inputs to a warning.
    pub ignore_missing: bool,

    /// Validation mode.
    pub mode: InputMode,

    /// Raw base path, not yet normalized. Empty means none.
    pub base_path: Option<String>,

    /// Extra remappings from configuration, applied after those in `inputs`.
    pub remappings: Vec<String>,
}

impl IngestOptions {
    /// Creates options for the given raw arguments with every flag off.
    #[must_use]
    pub fn new(inputs: Vec<String>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Sets the `ignore_missing` flag.
    #[must_use]
    pub const fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    /// Sets the input mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the base path.
    #[must_use]
    pub fn with_base_path(mut self, base_path: Option<String>) -> Self {
        self.base_path = base_path;
        self
    }

    /// Sets the configuration remappings.
    #[must_use]
    pub fn with_remappings(mut self, remappings: Vec<String>) -> Self {
        self.remappings = remappings;
        self
    }
}

/// A single step of an ingestion plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestAction {
    /// Read standard input under the name `<stdin>`.
    ReadStdin {
        /// Added because no input was given, not because of a `-`.
        implicit: bool,
    },

    /// Check and read one file.
    ReadFile {
        /// The argument exactly as given.
        raw: String,
        /// Its lexically normalized form.
        normalized: NormalizedPath,
    },

    /// Record a remapping and allow its target directory.
    AddRemapping(Remapping),
}

impl IngestAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::ReadStdin { implicit: true } => "Read standard input (no inputs given)".to_string(),
            Self::ReadStdin { implicit: false } => "Read standard input".to_string(),
            Self::ReadFile { raw, normalized } => format!("Read {raw} ({normalized})"),
            Self::AddRemapping(remapping) => format!("Add remapping {remapping}"),
        }
    }

    /// Whether this action consumes an input (a file or stdin).
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::ReadStdin { .. } | Self::ReadFile { .. })
    }
}

/// A validated ingestion plan.
#[derive(Debug, Clone)]
pub struct IngestPlan {
    /// A human-readable description of the run.
    pub description: String,

    /// Actions in command-line order.
    pub actions: Vec<IngestAction>,

    /// Resolver for source unit names.
    pub base: BasePathResolver,

    /// Whether missing files are skipped.
    pub ignore_missing: bool,
}

impl IngestPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new(description: impl Into<String>, base: BasePathResolver) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            base,
            ignore_missing: false,
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: IngestAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Sets whether missing files are skipped.
    #[must_use]
    pub const fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    /// Number of file actions.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| matches!(action, IngestAction::ReadFile { .. }))
            .count()
    }

    /// Whether any action reads standard input.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.actions
            .iter()
            .any(|action| matches!(action, IngestAction::ReadStdin { .. }))
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}

/// Builds an [`IngestPlan`] from options.
///
/// # Examples
///
/// ```
/// use srcgate::ingest::{IngestAction, IngestOptions, IngestPlanner, InputMode};
/// use srcgate::path::WorkingDirectory;
/// use std::path::Path;
///
/// # #[cfg(unix)]
/// # {
/// let cwd = WorkingDirectory::new(Path::new("/work")).unwrap();
///
/// let options = IngestOptions::new(vec![]).with_mode(InputMode::StandardJson);
/// let plan = IngestPlanner::new(&options, &cwd).build_plan().unwrap();
/// assert_eq!(plan.actions, vec![IngestAction::ReadStdin { implicit: true }]);
///
/// let options = IngestOptions::new(vec!["a=b".to_string()]).with_mode(InputMode::StandardJson);
/// assert!(IngestPlanner::new(&options, &cwd).build_plan().is_err());
/// # }
/// ```
pub struct IngestPlanner<'a> {
    options: &'a IngestOptions,
    cwd: &'a WorkingDirectory,
}

impl<'a> IngestPlanner<'a> {
    /// Creates a planner for `options`, resolving paths against `cwd`.
    #[must_use]
    pub const fn new(options: &'a IngestOptions, cwd: &'a WorkingDirectory) -> Self {
        Self { options, cwd }
    }

    /// The base path resolver these options produce.
    #[must_use]
    pub fn resolver(&self) -> BasePathResolver {
        BasePathResolver::new(
            self.cwd.normalized().clone(),
            self.options.base_path.as_deref(),
        )
    }

    /// Classify every argument and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A remapping is given in Standard JSON mode (`RemappingNotAllowed`)
    /// - A remapping is malformed (`InvalidRemapping`)
    /// - Standard JSON mode has more than one input (`TooManyInputs`)
    /// - Compiler mode has neither a file nor `-` (`NoInputFiles`)
    pub fn build_plan(&self) -> Result<IngestPlan> {
        let standard_json = self.options.mode == InputMode::StandardJson;
        let mut plan = IngestPlan::new(
            format!(
                "Ingest {} argument(s) in {} mode",
                self.options.inputs.len(),
                self.options.mode
            ),
            self.resolver(),
        )
        .with_ignore_missing(self.options.ignore_missing);

        for raw in &self.options.inputs {
            let action = if raw == STDIN_ARGUMENT {
                IngestAction::ReadStdin { implicit: false }
            } else if Remapping::is_remapping_shaped(raw) {
                if standard_json {
                    return Err(Error::RemappingNotAllowed);
                }
                IngestAction::AddRemapping(Remapping::parse(raw)?)
            } else {
                IngestAction::ReadFile {
                    raw: raw.clone(),
                    normalized: normalize(raw, self.cwd.normalized()),
                }
            };
            log::trace!("Planned: {}", action.description());
            plan = plan.add_action(action);
        }

        for raw in &self.options.remappings {
            if standard_json {
                return Err(Error::RemappingNotAllowed);
            }
            plan = plan.add_action(IngestAction::AddRemapping(Remapping::parse(raw)?));
        }

        let files = plan.file_count();
        let stdin = plan.reads_stdin();

        if standard_json && (files > 1 || (files == 1 && stdin)) {
            return Err(Error::TooManyInputs);
        }

        if files == 0 && !stdin {
            if !standard_json {
                return Err(Error::NoInputFiles);
            }
            plan.actions.insert(0, IngestAction::ReadStdin { implicit: true });
        }

        Ok(plan)
    }
}
