//! Command to validate a srcgate configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use srcgate::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a srcgate configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let config = ConfigLoader::load_file(&self.config_path)
            .map_err(|e| CliError::Config(e.to_string()))?;

        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        println!("Configuration is valid");
        Ok(())
    }
}
