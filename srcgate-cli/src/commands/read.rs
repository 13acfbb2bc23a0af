//! Read command implementation.
//!
//! This module implements the `read` command, which runs ingestion over the
//! given inputs against the real working directory and standard input.
//! Diagnostics go to stderr; the rendered result goes to stdout.

use crate::error::CliError;
use crate::utils::{load_configuration, working_directory, GlobalOptions};
use clap::{Args, ValueEnum};
use srcgate::{init_logger, Config, FileIngestor, InputMode, OutputFormat};
use std::io;

/// Read input files, stdin and remappings.
#[derive(Args)]
pub struct ReadCommand {
    /// Input files, `-` for standard input, or remappings (`[context:]prefix=target`)
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Directory source unit names are made relative to
    #[arg(long, value_name = "PATH")]
    pub base_path: Option<String>,

    /// Skip missing input files with a warning instead of failing
    #[arg(long)]
    pub ignore_missing: bool,

    /// Expect a single Standard JSON input (a file or standard input)
    #[arg(long)]
    pub standard_json: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Include source content in the output
    #[arg(long)]
    pub show_content: bool,
}

/// Output format for the read command.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable summary
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl ReadCommand {
    /// Configuration layer built from explicit flags.
    ///
    /// Flags that were not given stay unset so lower layers show through.
    fn overrides(&self) -> Config {
        Config {
            base_path: self.base_path.clone(),
            ignore_missing: self.ignore_missing.then_some(true),
            mode: self.standard_json.then_some(InputMode::StandardJson),
            remappings: None,
            output_format: self.format.map(OutputFormat::from),
        }
    }

    /// Execute the read command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);

        // 1. Load configuration
        let config = load_configuration(global, self.overrides())?;
        let format = config.output_format();

        // 2. Ingest
        let cwd = working_directory()?;
        let options = config.ingest_options(self.inputs);
        let stdin = io::stdin();
        let result = FileIngestor::new(&cwd, stdin.lock()).ingest(&options);

        // 3. Diagnostics first, in emission order
        for line in result.diagnostics() {
            logger.diagnostic(line);
        }

        logger.info(&format!(
            "Read {} source(s); {} allowed director(ies)",
            result.sources.len(),
            result.allowed_directories.len()
        ));

        // 4. Render; structured formats also describe failures
        if result.success || format != OutputFormat::Human {
            let rendered = format
                .create_formatter(self.show_content)
                .format(&result)?;
            println!("{rendered}");
        }

        if result.success {
            Ok(())
        } else {
            Err(CliError::IngestionFailed)
        }
    }
}
