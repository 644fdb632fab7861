//! `[locale]` section: html language code and BCP 47 tags.
//!
//! ```toml
//! [locale]
//! languageCode = "en"          # empty -> "en"
//! languageTags = ["en-EN"]     # empty -> environment default
//! ```

use serde::{Deserialize, Serialize};

/// Language code used when the configured one is empty.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    /// html `lang` attribute value.
    pub language_code: String,

    /// BCP 47 tags for date/number formatting, in preference order.
    /// Empty means "use the environment default".
    pub language_tags: Vec<String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language_code: DEFAULT_LANGUAGE_CODE.into(),
            language_tags: Vec::new(),
        }
    }
}

impl Locale {
    /// Copy with an empty `languageCode` replaced by [`DEFAULT_LANGUAGE_CODE`].
    ///
    /// An empty `languageTags` is kept as-is: the consumer resolves it
    /// against its runtime environment.
    pub fn resolved(&self) -> Self {
        let language_code = match self.language_code.trim() {
            "" => DEFAULT_LANGUAGE_CODE.to_string(),
            code => code.to_string(),
        };
        Self {
            language_code,
            language_tags: self.language_tags.clone(),
        }
    }

    #[inline]
    pub fn lang(&self) -> &str {
        &self.language_code
    }

    /// True when the consumer should fall back to its environment locale.
    #[inline]
    pub fn uses_environment_default(&self) -> bool {
        self.language_tags.is_empty()
    }
}
