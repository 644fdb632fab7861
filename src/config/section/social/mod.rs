//! `[[socials]]` section: ordered social-link entries.
//!
//! Declaration order is render order. Inactive entries are kept; filtering
//! them out is up to the consumer.
//!
//! ```toml
//! [[socials]]
//! platformName = "Github"
//! href = "https://github.com/alice"
//! active = true
//!
//! [[socials]]
//! platformName = "Mail"
//! href = "mailto:alice@example.com"
//! linkTitle = "Write to {title}"   # optional, defaults per platform
//! active = false
//! ```

mod platform;

pub use platform::{SocialPlatform, TITLE_PLACEHOLDER};

use crate::config::util::validate_link_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

const SECTION: &str = "socials";

/// A social link as declared, before its title template is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkSource {
    pub platform_name: SocialPlatform,

    pub href: String,

    /// Title template containing `{title}`; the platform default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_title: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl SocialLinkSource {
    pub fn new(platform_name: SocialPlatform, href: impl Into<String>, active: bool) -> Self {
        Self {
            platform_name,
            href: href.into(),
            link_title: None,
            active,
        }
    }

    pub fn with_link_title(mut self, template: impl Into<String>) -> Self {
        self.link_title = Some(template.into());
        self
    }

    /// Validate this entry, found at position `index` of the list.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        validate_link_url(FieldPath::indexed(SECTION, index, "href"), &self.href, diag);

        if let Some(template) = &self.link_title
            && !template.contains(TITLE_PLACEHOLDER)
        {
            diag.warn(
                FieldPath::indexed(SECTION, index, "linkTitle"),
                format!("template has no {TITLE_PLACEHOLDER} placeholder, used verbatim"),
            );
        }
    }

    /// Render this entry against the site title.
    pub fn resolve(&self, site_title: &str) -> SocialLinkEntry {
        let link_title = match &self.link_title {
            Some(template) => render_link_title(template, site_title),
            None => render_link_title(
                &self.platform_name.default_link_title_template(),
                site_title,
            ),
        };
        SocialLinkEntry {
            platform_name: self.platform_name,
            href: self.href.clone(),
            link_title,
            active: self.active,
        }
    }
}

/// A social link ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkEntry {
    pub platform_name: SocialPlatform,
    pub href: String,
    pub link_title: String,
    pub active: bool,
}

/// Substitute `site_title` for the first `{title}` in `template`.
pub fn render_link_title(template: &str, site_title: &str) -> String {
    template.replacen(TITLE_PLACEHOLDER, site_title, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_title() {
        let entry = SocialLinkSource::new(SocialPlatform::Github, "https://github.com/alice", true)
            .resolve("Example");
        assert_eq!(entry.link_title, "Example on Github");
        assert_eq!(entry.platform_name, SocialPlatform::Github);
        assert!(entry.active);
    }

    #[test]
    fn test_resolve_mail_title() {
        let entry = SocialLinkSource::new(SocialPlatform::Mail, "mailto:a@example.com", false)
            .resolve("Example");
        assert_eq!(entry.link_title, "Send an email to Example");
        assert!(!entry.active);
    }

    #[test]
    fn test_custom_template_substituted_once() {
        let entry = SocialLinkSource::new(SocialPlatform::X, "https://x.com/alice", true)
            .with_link_title("Follow {title} ({title})")
            .resolve("Example");
        assert_eq!(entry.link_title, "Follow Example ({title})");
    }

    #[test]
    fn test_title_containing_placeholder_not_expanded() {
        assert_eq!(render_link_title("{title} on X", "{title}"), "{title} on X");
    }

    #[test]
    fn test_validate_href() {
        let mut diag = ConfigDiagnostics::new();
        SocialLinkSource::new(SocialPlatform::Github, "github.com/alice", true)
            .validate(2, &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "socials[2].href");
    }

    #[test]
    fn test_template_without_placeholder_warns() {
        let mut diag = ConfigDiagnostics::new();
        SocialLinkSource::new(SocialPlatform::Github, "https://github.com/alice", true)
            .with_link_title("My code")
            .validate(0, &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let source: SocialLinkSource =
            toml::from_str("platformName = \"Mastodon\"\nhref = \"https://mastodon.social/@a\"")
                .unwrap();
        assert!(source.active);
        assert!(source.link_title.is_none());
    }
}
