//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};

/// Validate a web URL (site address, profile, edit link).
///
/// Uses `url` crate for strict validation:
/// - must parse as an absolute URL
/// - scheme must be `http` or `https`
/// - must have a host
pub fn validate_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Validate a link target that may use any scheme (`https:`, `mailto:`, ...).
pub fn validate_link_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) {
    if let Err(e) = url::Url::parse(value) {
        diag.error_with_hint(
            field,
            format!("invalid URL '{value}': {e}"),
            "use an absolute URL, e.g. https://github.com/alice or mailto:alice@example.com",
        );
    }
}

/// Extract path component from a URL string
///
/// Returns `None` if the URL is invalid
///
/// # Examples
/// ```ignore
/// extract_url_path("https://example.github.io/my-project/") -> Some("my-project")
/// extract_url_path("https://example.com")                   -> Some("")
/// extract_url_path("invalid")                               -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    let path = parsed.path().trim_matches('/');
    Some(path.to_string())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldPath = FieldPath::new("site.website");

    fn http_errors(value: &str) -> usize {
        let mut diag = ConfigDiagnostics::new();
        validate_http_url(FIELD, value, &mut diag);
        diag.len()
    }

    #[test]
    fn test_http_url_accepts_site_addresses() {
        assert_eq!(http_errors("https://blogs.irangareddy.in/"), 0);
        assert_eq!(http_errors("http://localhost:4321"), 0);
        assert_eq!(
            http_errors("https://github.com/irangareddy/blog/edit/main/src/content/blog"),
            0
        );
    }

    #[test]
    fn test_http_url_rejects_malformed() {
        assert_eq!(http_errors("not a url"), 1);
        assert_eq!(http_errors("blogs.irangareddy.in"), 1);
        assert_eq!(http_errors(""), 1);
        assert_eq!(http_errors("ftp://example.com"), 1);
        assert_eq!(http_errors("mailto:someone@example.com"), 1);
    }

    #[test]
    fn test_link_url_accepts_mailto() {
        let mut diag = ConfigDiagnostics::new();
        validate_link_url(FIELD, "mailto:yourmail@gmail.com", &mut diag);
        validate_link_url(FIELD, "https://x.com/irangareddy", &mut diag);
        assert!(diag.is_empty());

        validate_link_url(FIELD, "x.com/irangareddy", &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://example.github.io/my-project/"),
            Some("my-project".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(
            extract_url_path("https://example.com/path?query=1#frag"),
            Some("path".to_string())
        );
        assert_eq!(extract_url_path("invalid-url"), None);
    }
}
