//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    InvalidField(ConfigDiagnostics),
}

impl ConfigError {
    /// Diagnostics carried by an `InvalidField` error.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::InvalidField(diag) => Some(diag),
            _ => None,
        }
    }

    /// Whether this error names `field` as one of the offending fields.
    pub fn names_field(&self, field: &str) -> bool {
        self.diagnostics()
            .is_some_and(|diag| diag.errors().iter().any(|e| e.field.as_str() == field))
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "site.postsPerPage")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collects every invalid field of a configuration so one run reports them all.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Non-fatal notes, handed back to the caller on success.
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (does not fail validation).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Move every error and warning of `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// `InvalidField` if any error was collected, the warnings otherwise.
    pub fn finish(self) -> Result<Vec<ConfigDiagnostic>, ConfigError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(ConfigError::InvalidField(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));
    }

    #[test]
    fn test_invalid_field_names_offending_field() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.postsPerPage"), "must be at least 1, got 0");
        let err = diag.finish().unwrap_err();

        assert!(err.names_field("site.postsPerPage"));
        assert!(!err.names_field("site.website"));
        let display = format!("{err}");
        assert!(display.contains("site.postsPerPage"));
        assert!(display.contains("must be at least 1"));
    }

    #[test]
    fn test_warnings_returned_on_success() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("socials[5].linkTitle"), "no placeholder");
        assert!(diag.is_empty());

        let warnings = diag.finish().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field.as_str(), "socials[5].linkTitle");
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ConfigDiagnostics::new();
        first.error(FieldPath::new("site.website"), "invalid URL");
        let mut second = ConfigDiagnostics::new();
        second.error(FieldPath::new("logo.width"), "must be positive");
        second.warn(FieldPath::new("socials[0].linkTitle"), "no placeholder");

        first.merge(second);
        assert_eq!(first.warnings().len(), 1);
        let fields: Vec<_> = first.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.website", "logo.width"]);
    }
}
