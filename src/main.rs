//! Blogconf - inspect and validate the blog's site configuration.

use anyhow::Result;
use blogconf::cli::{self, Cli};
use blogconf::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = cli::load_config(&cli)?;
    cli::run(&cli, &config)
}
