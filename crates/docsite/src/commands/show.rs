//! `docsite show` command implementation.

use clap::{Args, ValueEnum};
use docsite_config::ConfigFormat;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Output format for the show command.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Toml,
    Yaml,
    Json,
}

impl From<Format> for ConfigFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Toml => Self::Toml,
            Format::Yaml => Self::Yaml,
            Format::Json => Self::Json,
        }
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl ShowArgs {
    /// Execute the show command.
    ///
    /// Prints the normalized configuration; the output loads back to the
    /// same configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or serialized.
    pub(crate) fn execute(self, args: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = args.load()?;
        let serialized = ConfigFormat::from(self.format).serialize(&config)?;
        output.result(serialized.trim_end())?;
        Ok(())
    }
}
