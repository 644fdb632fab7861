//! Command-line interface module.
//!
//! The binary is the process entry point: it builds the configuration once,
//! then passes the shared `Arc<SiteConfig>` to the selected command.

mod args;
mod commands;

pub use args::{Cli, Commands};
pub use commands::{check, dump, socials};

use crate::config::{ConfigDiagnostic, ConfigProvider, SiteConfig, SourceConfig};
use crate::{debug, log};
use anyhow::{Result, bail};
use std::{path::Path, sync::Arc};

/// Build the configuration selected by the CLI (`-C <file>` or built-in).
pub fn load_config(cli: &Cli) -> Result<Arc<SiteConfig>> {
    let source = match &cli.config {
        Some(path) => load_source(path, cli.deny_unknown)?,
        None => {
            debug!("config"; "using built-in configuration");
            SourceConfig::builtin()?
        }
    };

    let (config, warnings) = ConfigProvider::new(source).load()?;
    print_config_warnings(&warnings);

    debug!(
        "config";
        "loaded '{}' with {} social links ({} active)",
        config.site.title,
        config.socials.len(),
        config.active_social_links().count()
    );
    Ok(Arc::new(config))
}

/// Print non-fatal validation warnings.
fn print_config_warnings(warnings: &[ConfigDiagnostic]) {
    if warnings.is_empty() {
        return;
    }
    log!("warning"; "{} config warning(s):", warnings.len());
    for warning in warnings {
        eprintln!("- {}: {}", warning.field.as_str(), warning.message);
    }
}

/// Read a config file, reporting unknown fields.
fn load_source(path: &Path, deny_unknown: bool) -> Result<SourceConfig> {
    debug!("config"; "loading {}", path.display());
    let (source, ignored) = SourceConfig::from_path(path)?;

    if !ignored.is_empty() {
        print_unknown_fields_warning(&ignored, path);
        if deny_unknown {
            bail!("Aborted due to unknown config fields");
        }
    }

    Ok(source)
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

/// Run the selected command against a loaded configuration.
pub fn run(cli: &Cli, config: &SiteConfig) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match &cli.command {
        Commands::Check => check(config, &mut stdout),
        Commands::Dump { pretty } => dump(config, *pretty, &mut stdout),
        Commands::Socials { all } => socials(config, *all, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use clap::Parser;
    use std::fs;

    const VALID: &str = r#"
[site]
website = "https://example.com/"
profileURL = "https://example.com/about"
title = "Example"

[site.editPost]
url = "https://github.com/example/blog/edit/main"

[[socials]]
platformName = "Github"
href = "https://github.com/example"
"#;

    fn cli_for(path: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["blogconf", "-C", path.to_str().unwrap()];
        args.extend_from_slice(extra);
        args.push("check");
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_load_builtin() {
        let cli = Cli::try_parse_from(["blogconf", "check"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.site.author, "Ranga Reddy Nukala");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, VALID).unwrap();

        let config = load_config(&cli_for(&path, &[])).unwrap();
        assert_eq!(config.site.title, "Example");
        assert_eq!(config.socials[0].link_title, "Example on Github");
    }

    #[test]
    fn test_unknown_fields_denied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, format!("{VALID}\n[extra]\nkey = 1\n")).unwrap();

        assert!(load_config(&cli_for(&path, &[])).is_ok());
        assert!(load_config(&cli_for(&path, &["--deny-unknown"])).is_err());
    }

    #[test]
    fn test_template_warning_does_not_fail_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, format!("{VALID}linkTitle = \"My code\"\n")).unwrap();

        let config = load_config(&cli_for(&path, &[])).unwrap();
        assert_eq!(config.socials[0].link_title, "My code");
    }

    #[test]
    fn test_negative_counter_reports_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, VALID.replace("title = \"Example\"", "postsPerPage = -2")).unwrap();

        let err = load_config(&cli_for(&path, &[])).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(config_err.names_field("site.postsPerPage"));
    }

    #[test]
    fn test_invalid_file_reports_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, VALID.replace("title = \"Example\"", "postsPerPage = 0")).unwrap();

        let err = load_config(&cli_for(&path, &[])).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(config_err.names_field("site.postsPerPage"));
    }
}
