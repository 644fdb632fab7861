//! `[site]` section: site-wide metadata.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://blog.example.com/"
//! author = "Alice"
//! profileURL = "https://example.com/"
//! description = "A personal blog"
//! title = "Alice's Blog"
//! ogImagePath = "og.jpg"
//! postsPerIndexPage = 6
//! postsPerPage = 5
//! scheduledPostMarginMillis = 900000
//!
//! [site.editPost]
//! url = "https://github.com/alice/blog/edit/main/src/content/blog"
//! linkText = "Suggest Changes"
//! appendFilePath = true
//! ```

use crate::config::util::{extract_url_path, validate_http_url};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Default grace period for scheduled posts (15 minutes).
pub const DEFAULT_SCHEDULED_POST_MARGIN_MILLIS: i64 = 15 * 60 * 1000;

/// Site metadata used for page rendering and SEO tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    /// Canonical site address.
    pub website: String,

    pub author: String,

    /// Author's personal/profile page.
    #[serde(rename = "profileURL")]
    pub profile_url: String,

    pub description: String,

    pub title: String,

    /// Default Open Graph image, relative to the public directory.
    pub og_image_path: String,

    /// Show the light/dark theme toggle.
    pub light_and_dark_mode_enabled: bool,

    /// Number of recent posts on the index page. Must be >= 1.
    pub posts_per_index_page: i64,

    /// Number of posts per paginated listing page. Must be >= 1.
    pub posts_per_page: i64,

    /// Posts dated at most this far in the future are already shown. Must be >= 0.
    pub scheduled_post_margin_millis: i64,

    pub show_archives: bool,

    /// "Edit this post" link settings.
    pub edit_post: EditPost,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            profile_url: String::new(),
            description: String::new(),
            title: String::new(),
            og_image_path: String::new(),
            light_and_dark_mode_enabled: true,
            posts_per_index_page: 4,
            posts_per_page: 3,
            scheduled_post_margin_millis: DEFAULT_SCHEDULED_POST_MARGIN_MILLIS,
            show_archives: true,
            edit_post: EditPost::default(),
        }
    }
}

/// Field paths of [`SiteMetadata`], for diagnostics.
pub struct SiteMetadataFields {
    pub website: FieldPath,
    pub profile_url: FieldPath,
    pub posts_per_index_page: FieldPath,
    pub posts_per_page: FieldPath,
    pub scheduled_post_margin_millis: FieldPath,
    pub edit_post_url: FieldPath,
}

impl SiteMetadata {
    pub const FIELDS: SiteMetadataFields = SiteMetadataFields {
        website: FieldPath::new("site.website"),
        profile_url: FieldPath::new("site.profileURL"),
        posts_per_index_page: FieldPath::new("site.postsPerIndexPage"),
        posts_per_page: FieldPath::new("site.postsPerPage"),
        scheduled_post_margin_millis: FieldPath::new("site.scheduledPostMarginMillis"),
        edit_post_url: FieldPath::new("site.editPost.url"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `website`, `profileURL` and `editPost.url` are http(s) URLs with a host
    /// - `postsPerIndexPage` and `postsPerPage` are at least 1
    /// - `scheduledPostMarginMillis` is not negative
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_http_url(Self::FIELDS.website, &self.website, diag);
        validate_http_url(Self::FIELDS.profile_url, &self.profile_url, diag);
        validate_http_url(Self::FIELDS.edit_post_url, &self.edit_post.url, diag);

        if self.posts_per_index_page < 1 {
            diag.error(
                Self::FIELDS.posts_per_index_page,
                format!("must be at least 1, got {}", self.posts_per_index_page),
            );
        }
        if self.posts_per_page < 1 {
            diag.error(
                Self::FIELDS.posts_per_page,
                format!("must be at least 1, got {}", self.posts_per_page),
            );
        }
        if self.scheduled_post_margin_millis < 0 {
            diag.error_with_hint(
                Self::FIELDS.scheduled_post_margin_millis,
                format!(
                    "must not be negative, got {}",
                    self.scheduled_post_margin_millis
                ),
                "use 0 to hide every post dated in the future",
            );
        }
    }

    /// Whether a post published at `pub_millis` is visible at `now_millis`.
    ///
    /// Both are milliseconds since the Unix epoch. A scheduled post shows up
    /// once it is within `scheduledPostMarginMillis` of its publish time.
    pub fn is_publish_time_passed(&self, pub_millis: i64, now_millis: i64) -> bool {
        now_millis > pub_millis.saturating_sub(self.scheduled_post_margin_millis)
    }

    /// Path component of `website`, used as a prefix for generated links.
    ///
    /// `https://example.github.io/blog/` yields `blog`; a root site yields "".
    pub fn path_prefix(&self) -> String {
        extract_url_path(&self.website).unwrap_or_default()
    }
}

/// "Edit this post" link settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditPost {
    /// Base URL of the source tree in the repository web UI.
    pub url: String,

    /// Text of the rendered link.
    pub link_text: String,

    /// Append the post's source file path to `url`.
    pub append_file_path: bool,
}

impl EditPost {
    /// Edit link for the post stored at `file_path`.
    pub fn link_for(&self, file_path: &str) -> String {
        if !self.append_file_path {
            return self.url.clone();
        }
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            file_path.trim_start_matches('/')
        )
    }
}
