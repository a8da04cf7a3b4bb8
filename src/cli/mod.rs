// ABOUTME: CLI argument parsing and command routing for brandmagnet
//
// Provides command-line interface for:
// - Running the qualification funnel and testimonials (tui, default)
// - Printing the questionnaire (steps)
// - Printing the testimonial catalogue (testimonials)

pub mod steps;
pub mod testimonials;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Lead qualification funnel and client testimonials in the terminal
#[derive(Parser)]
#[command(name = "brandmagnet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to use instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Print the qualification questionnaire
    Steps,

    /// Print the testimonial catalogue
    Testimonials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["brandmagnet"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["brandmagnet", "steps", "--format", "json", "--config", "site.toml"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Steps)));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["brandmagnet", "--format", "yaml"]).is_err());
    }
}
