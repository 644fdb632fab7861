//! Blogconf - typed, validated configuration for a personal blog.
//!
//! Provides the site metadata, locale, logo flags and social links a site
//! generator needs to render pages, SEO tags and the social-links widget.
//!
//! ```ignore
//! let config = blogconf::config::SiteConfig::builtin()?;
//! for link in config.active_social_links() {
//!     println!("{} -> {}", link.link_title, link.href);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logger;

pub use config::{ConfigError, ConfigProvider, SiteConfig, SourceConfig};
