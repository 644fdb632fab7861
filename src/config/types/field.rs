//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path naming a single configuration field.
///
/// Paths use the serialized (camelCase) key names so a diagnostic points at
/// exactly what the author wrote, e.g. `site.postsPerPage` or
/// `socials[3].href`.
///
/// ```ignore
/// diag.error(SiteMetadata::FIELDS.posts_per_page, "must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(std::borrow::Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(path))
    }

    /// Path of a field inside one element of a list section.
    pub fn indexed(section: &str, index: usize, field: &str) -> Self {
        Self(std::borrow::Cow::Owned(format!("{section}[{index}].{field}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_path() {
        let path = FieldPath::indexed("socials", 4, "href");
        assert_eq!(path.as_str(), "socials[4].href");
    }

    #[test]
    fn test_static_path() {
        const PATH: FieldPath = FieldPath::new("site.website");
        assert_eq!(PATH.as_str(), "site.website");
        assert_eq!(PATH, FieldPath::new("site.website"));
    }
}
