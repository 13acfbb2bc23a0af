//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, NamesCommand, ReadCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Source-file ingestion and sandbox resolution for compiler front ends.
#[derive(Parser)]
#[command(name = "srcgate")]
#[command(version, about = "Ingest compiler source inputs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "SRCGATE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read input files, stdin and remappings
    Read(ReadCommand),

    /// Preview the source unit names of paths
    Names(NamesCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
