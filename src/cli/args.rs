//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate the blog's site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: the built-in configuration)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Treat unknown config fields as an error
    #[arg(long, global = true)]
    pub deny_unknown: bool,

    /// Print debug information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the configuration and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated configuration as JSON
    #[command(visible_alias = "d")]
    Dump {
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List social links in render order
    #[command(visible_alias = "s")]
    Socials {
        /// Include inactive entries
        #[arg(short, long)]
        all: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dump_with_config() {
        let cli = Cli::try_parse_from(["blogconf", "dump", "--pretty", "-C", "site.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Commands::Dump { pretty: true }));
    }

    #[test]
    fn test_parse_socials_alias() {
        let cli = Cli::try_parse_from(["blogconf", "-v", "s", "--all"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Socials { all: true }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["blogconf"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
