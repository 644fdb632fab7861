//! `[logo]` section: how the header logo is rendered.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Logo render flags. When disabled, consumers render the site title instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoDisplay {
    pub enabled: bool,

    /// Logo is an SVG (inlined) rather than a raster image.
    pub is_vector: bool,

    /// Rendered width in pixels.
    pub width: i64,

    /// Rendered height in pixels.
    pub height: i64,
}

impl Default for LogoDisplay {
    fn default() -> Self {
        Self {
            enabled: false,
            is_vector: true,
            width: 216,
            height: 46,
        }
    }
}

pub struct LogoDisplayFields {
    pub width: FieldPath,
    pub height: FieldPath,
}

impl LogoDisplay {
    pub const FIELDS: LogoDisplayFields = LogoDisplayFields {
        width: FieldPath::new("logo.width"),
        height: FieldPath::new("logo.height"),
    };

    /// Dimensions must be positive, whether or not the logo is enabled.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.width < 1 {
            diag.error(Self::FIELDS.width, "must be a positive number of pixels");
        }
        if self.height < 1 {
            diag.error(Self::FIELDS.height, "must be a positive number of pixels");
        }
    }
}
