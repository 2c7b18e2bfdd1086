//! docsite CLI - documentation site configuration checker.
//!
//! Provides commands for:
//! - `check`: Validate the site configuration and print a summary
//! - `show`: Print the normalized configuration
//! - `sidebar`: Print the normalized sidebar tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, ShowArgs};
use output::Output;

/// docsite - documentation site configuration checker.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print a summary.
    Check,
    /// Print the normalized configuration.
    Show(ShowArgs),
    /// Print the normalized sidebar tree.
    Sidebar,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.config.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check => commands::check::execute(&cli.config),
        Commands::Show(args) => args.execute(&cli.config),
        Commands::Sidebar => commands::sidebar::execute(&cli.config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_config_args_before_command() {
        let cli =
            Cli::try_parse_from(["docsite", "--config", "x.toml", "--year", "2024", "-v", "check"])
                .unwrap();
        assert_eq!(cli.config.config.as_deref(), Some(Path::new("x.toml")));
        assert_eq!(cli.config.year, Some(2024));
        assert!(cli.config.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_config_args_after_command() {
        let cli = Cli::try_parse_from([
            "docsite", "show", "--format", "json", "--config", "x.toml", "--year", "2024",
        ])
        .unwrap();
        assert_eq!(cli.config.config.as_deref(), Some(Path::new("x.toml")));
        assert_eq!(cli.config.year, Some(2024));
        assert!(!cli.config.verbose);
        assert!(matches!(cli.command, Commands::Show(_)));
    }

    #[test]
    fn test_sidebar_without_options() {
        let cli = Cli::try_parse_from(["docsite", "sidebar"]).unwrap();
        assert_eq!(cli.config.year, None);
        assert!(matches!(cli.command, Commands::Sidebar));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["docsite", "show", "--format", "xml"]).is_err());
    }
}
