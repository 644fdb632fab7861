//! `check`, `dump` and `socials` commands.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;
use std::io::Write;

/// Print a short summary of a configuration that passed validation.
pub fn check(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let site = &config.site;
    writeln!(out, "site     {} ({})", site.title, site.website)?;
    writeln!(out, "author   {} ({})", site.author, site.profile_url)?;
    writeln!(
        out,
        "pages    {} on index, {} per page",
        site.posts_per_index_page, site.posts_per_page
    )?;

    let tags = if config.locale.uses_environment_default() {
        "environment default".to_string()
    } else {
        config.locale.language_tags.join(", ")
    };
    writeln!(out, "locale   {} [{}]", config.locale.lang(), tags)?;

    let logo = &config.logo;
    if logo.enabled {
        let kind = if logo.is_vector { "svg" } else { "raster" };
        writeln!(out, "logo     {}x{} {}", logo.width, logo.height, kind)?;
    } else {
        writeln!(out, "logo     disabled")?;
    }

    writeln!(
        out,
        "socials  {} ({} active)",
        config.socials.len(),
        config.active_social_links().count()
    )?;

    log!("check"; "configuration is valid");
    Ok(())
}

/// Write the configuration as JSON, the format read by the site generator.
pub fn dump(config: &SiteConfig, pretty: bool, out: &mut impl Write) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, config)?;
    } else {
        serde_json::to_writer(&mut *out, config)?;
    }
    writeln!(out)?;
    Ok(())
}

/// List social links in render order, one per line.
pub fn socials(config: &SiteConfig, all: bool, out: &mut impl Write) -> Result<()> {
    for entry in config.socials.iter().filter(|entry| all || entry.active) {
        let marker = if entry.active { "+" } else { "-" };
        writeln!(
            out,
            "{} {:<10} {:<45} {}",
            marker, entry.platform_name, entry.href, entry.link_title
        )?;
    }
    Ok(())
}
