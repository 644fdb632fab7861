//! Blog configuration: site metadata, locale, logo and social links.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section types and their validation
//! │   ├── site       # [site]
//! │   ├── locale     # [locale]
//! │   ├── logo       # [logo]
//! │   └── social     # [[socials]]
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! ├── source         # SourceConfig (raw TOML document)
//! └── mod.rs         # ConfigProvider, SiteConfig (this file)
//! ```
//!
//! A [`ConfigProvider`] wraps a [`SourceConfig`] and hands out validated
//! values. [`ConfigProvider::load`] builds all of them at once into a
//! [`SiteConfig`], which is immutable from then on and is shared by
//! reference (or `Arc`) with whatever renders the site.

pub mod section;
mod source;
pub mod types;
mod util;

pub use section::{
    EditPost, Locale, LogoDisplay, SiteMetadata, SocialLinkEntry, SocialLinkSource,
    SocialPlatform,
};
pub use source::SourceConfig;
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use serde::{Deserialize, Serialize};

// ============================================================================
// ready configuration
// ============================================================================

/// Fully validated configuration handed to the site generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site: SiteMetadata,
    pub locale: Locale,
    pub logo: LogoDisplay,
    /// All entries in declaration order, inactive ones included.
    pub socials: Vec<SocialLinkEntry>,
}

impl SiteConfig {
    /// Load the built-in configuration.
    pub fn builtin() -> Result<Self, ConfigError> {
        ConfigProvider::builtin()?.load().map(|(config, _)| config)
    }

    /// Active social links, in declaration order.
    pub fn active_social_links(&self) -> impl Iterator<Item = &SocialLinkEntry> {
        self.socials.iter().filter(|entry| entry.active)
    }
}

// ============================================================================
// provider
// ============================================================================

/// Builds validated configuration values from a [`SourceConfig`].
///
/// Every `load_*` call is pure: it reads the source and returns a fresh
/// value, so repeated calls return equal results.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    source: SourceConfig,
}

impl ConfigProvider {
    pub fn new(source: SourceConfig) -> Self {
        Self { source }
    }

    /// Provider over the configuration compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        SourceConfig::builtin().map(Self::new)
    }

    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Site metadata, failing on malformed URLs or out-of-range counters.
    pub fn load_site(&self) -> Result<SiteMetadata, ConfigError> {
        self.site_diagnostics().finish()?;
        Ok(self.source.site.clone())
    }

    /// Language settings, with an empty language code replaced by `"en"`.
    ///
    /// Empty `languageTags` are returned unchanged; see
    /// [`Locale::uses_environment_default`].
    pub fn load_locale(&self) -> Locale {
        self.source.locale.resolved()
    }

    /// Logo flags, failing only on non-positive dimensions.
    pub fn load_logo_display(&self) -> Result<LogoDisplay, ConfigError> {
        self.logo_diagnostics().finish()?;
        Ok(self.source.logo.clone())
    }

    /// Social links with titles rendered against `site.title`, plus any
    /// warnings about their templates.
    ///
    /// Order is the declaration order and inactive entries are included.
    pub fn load_social_links(
        &self,
        site: &SiteMetadata,
    ) -> Result<(Vec<SocialLinkEntry>, Vec<ConfigDiagnostic>), ConfigError> {
        let (entries, diag) = self.social_links(site);
        let warnings = diag.finish()?;
        Ok((entries, warnings))
    }

    fn site_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.source.site.validate(&mut diag);
        diag
    }

    fn logo_diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.source.logo.validate(&mut diag);
        diag
    }

    fn social_links(&self, site: &SiteMetadata) -> (Vec<SocialLinkEntry>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let entries = self
            .source
            .socials
            .iter()
            .enumerate()
            .map(|(index, source)| {
                source.validate(index, &mut diag);
                source.resolve(&site.title)
            })
            .collect();
        (entries, diag)
    }

    /// Build every value at once.
    ///
    /// Collects all validation errors and returns them at once, so a single
    /// run names every offending field. Warnings are returned for the caller
    /// to report.
    pub fn load(&self) -> Result<(SiteConfig, Vec<ConfigDiagnostic>), ConfigError> {
        let site = &self.source.site;
        let (socials, social_diag) = self.social_links(site);

        let mut diag = self.site_diagnostics();
        diag.merge(self.logo_diagnostics());
        diag.merge(social_diag);
        let warnings = diag.finish()?;

        let config = SiteConfig {
            site: site.clone(),
            locale: self.load_locale(),
            logo: self.source.logo.clone(),
            socials,
        };
        Ok((config, warnings))
    }
}

// ============================================================================
// tests
// ============================================================================
