//! Header configuration.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Branding and formatting knobs for the header.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Symbol appended to the balance text.
    pub native_symbol: String,
    /// Significant digits used when formatting the balance.
    pub significant_digits: usize,
    /// Image source for the logo.
    pub logo_src: String,
    pub logo_alt: String,
    /// Logo height in pixels.
    pub logo_height: u32,
    /// Target of the logo/home link.
    pub home_href: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            native_symbol: "BNB".to_string(),
            significant_digits: 4,
            logo_src: "assets/images/streetswap_logo.png".to_string(),
            logo_alt: "logo".to_string(),
            logo_height: 50,
            home_href: ".".to_string(),
        }
    }
}

impl HeaderConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    /// Returns error if the document is not valid JSON for this shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("failed to parse header config")
    }

    /// Load a JSON config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded header config");
        Ok(config)
    }
}
