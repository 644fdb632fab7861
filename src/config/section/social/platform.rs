//! Known social platforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the site title in link-title templates.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Platforms the social-links widget knows an icon for.
///
/// Serialized by variant name (`"Github"`, `"LinkedIn"`, `"X"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    X,
    Twitch,
    YouTube,
    WhatsApp,
    Snapchat,
    Pinterest,
    TikTok,
    CodePen,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
}

impl SocialPlatform {
    pub const ALL: [Self; 21] = [
        Self::Github,
        Self::Facebook,
        Self::Instagram,
        Self::LinkedIn,
        Self::Mail,
        Self::Twitter,
        Self::X,
        Self::Twitch,
        Self::YouTube,
        Self::WhatsApp,
        Self::Snapchat,
        Self::Pinterest,
        Self::TikTok,
        Self::CodePen,
        Self::Discord,
        Self::GitLab,
        Self::Reddit,
        Self::Skype,
        Self::Steam,
        Self::Telegram,
        Self::Mastodon,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "Github",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
            Self::Mail => "Mail",
            Self::Twitter => "Twitter",
            Self::X => "X",
            Self::Twitch => "Twitch",
            Self::YouTube => "YouTube",
            Self::WhatsApp => "WhatsApp",
            Self::Snapchat => "Snapchat",
            Self::Pinterest => "Pinterest",
            Self::TikTok => "TikTok",
            Self::CodePen => "CodePen",
            Self::Discord => "Discord",
            Self::GitLab => "GitLab",
            Self::Reddit => "Reddit",
            Self::Skype => "Skype",
            Self::Steam => "Steam",
            Self::Telegram => "Telegram",
            Self::Mastodon => "Mastodon",
        }
    }

    /// Link-title template used when an entry doesn't set its own.
    pub fn default_link_title_template(self) -> String {
        match self {
            Self::Mail => format!("Send an email to {TITLE_PLACEHOLDER}"),
            other => format!("{TITLE_PLACEHOLDER} on {}", other.as_str()),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_name() {
        for platform in SocialPlatform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let result: Result<SocialPlatform, _> = serde_json::from_str("\"MySpace\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_templates() {
        assert_eq!(
            SocialPlatform::Github.default_link_title_template(),
            "{title} on Github"
        );
        assert_eq!(
            SocialPlatform::Mail.default_link_title_template(),
            "Send an email to {title}"
        );
    }
}
