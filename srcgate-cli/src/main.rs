//! Main entry point for the srcgate CLI.
//!
//! Commands:
//! - `read`: Ingest inputs and report names, content sizes and allowed directories
//! - `names`: Preview source unit names without reading anything
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use srcgate_cli::cli::{Cli, Command};
use srcgate_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library logging to stderr at the requested verbosity
    srcgate::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        Command::Read(cmd) => cmd.execute(&global),
        Command::Names(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !e.is_reported() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
