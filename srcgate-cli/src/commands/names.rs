//! Names command implementation.
//!
//! Previews the source unit name each path would be stored under. Only
//! lexical normalization and base-path stripping run; no input is opened.

use crate::error::CliError;
use crate::utils::{load_configuration, working_directory, GlobalOptions};
use clap::Args;
use srcgate::ingest::STDIN_ARGUMENT;
use srcgate::path::{normalize, STDIN_SOURCE_NAME};
use srcgate::{Config, IngestOptions, IngestPlanner};

/// Preview the source unit names of paths.
#[derive(Args)]
pub struct NamesCommand {
    /// Paths to name (`-` stands for standard input)
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<String>,

    /// Directory source unit names are made relative to
    #[arg(long, value_name = "PATH")]
    pub base_path: Option<String>,
}

impl NamesCommand {
    /// Execute the names command.
    ///
    /// Prints one tab-separated line per path: the argument, its normalized
    /// form and its source unit name.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(
            global,
            Config {
                base_path: self.base_path.clone(),
                ..Config::default()
            },
        )?;
        let cwd = working_directory()?;

        let options = IngestOptions::new(Vec::new()).with_base_path(config.base_path);
        let resolver = IngestPlanner::new(&options, &cwd).resolver();

        if let Some(base) = resolver.base_path() {
            eprintln!("# base path: {base}");
        }

        for raw in &self.paths {
            if raw == STDIN_ARGUMENT {
                println!("{raw}\t-\t{STDIN_SOURCE_NAME}");
                continue;
            }
            let normalized = normalize::normalize(raw, cwd.normalized());
            let resolution = resolver.resolve(&normalized);
            println!("{raw}\t{normalized}\t{}", resolution.source_unit_name);
        }

        Ok(())
    }
}
