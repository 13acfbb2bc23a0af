//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading and working directory capture.

use crate::error::CliError;
use srcgate::path::WorkingDirectory;
use srcgate::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags, passed in as `overrides` (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref config_dir) = global.config_dir {
        builder = builder.with_config_dir(config_dir);
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Capture the process working directory.
pub fn working_directory() -> Result<WorkingDirectory, CliError> {
    WorkingDirectory::capture().map_err(CliError::from)
}
