//! Unvalidated configuration as written by the site author.

use super::ConfigError;
use super::section::{Locale, LogoDisplay, SiteMetadata, SocialLinkSource};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Configuration document compiled into the binary.
const BUILTIN: &str = include_str!("builtin.toml");

/// Raw configuration document: `[site]`, `[locale]`, `[logo]`, `[[socials]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub site: SiteMetadata,
    pub locale: Locale,
    pub logo: LogoDisplay,
    pub socials: Vec<SocialLinkSource>,
}

impl SourceConfig {
    /// The blog's own configuration.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_str(BUILTIN)
    }

    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Read and parse a configuration file, collecting any unknown fields.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }
}
