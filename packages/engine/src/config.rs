//! Configuration for the Open Graph engine
//!
//! Centralized limits and the optional settings document. The settings
//! document supplies the default URL for new holders and a list of seed
//! properties written into every holder the directory creates, e.g.:
//!
//! ```yaml
//! default_url: https://example.com/
//! properties:
//!   site_name: Example
//!   locale: nl_NL
//!   image:type: image/png
//! ```
//!
//! Seed keys are validated when the settings are loaded, so that creating
//! a holder from settings can never fail.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{OpenGraphError, Result};
use crate::holder::validate_key;

/// Name of the instance used by the directory's pass-through operations.
pub const DEFAULT_INSTANCE: &str = "default";

/// Maximum settings document size in bytes (64 KiB).
///
/// A settings file is a handful of lines; anything larger is a mistake.
pub const MAX_SETTINGS_SIZE: usize = 64 * 1024;

/// Maximum number of seed properties in a settings document.
///
/// The whole whitelist (flat and structured) is well under this.
pub const MAX_SEED_PROPERTIES: usize = 64;

/// Number of named instances after which the directory starts warning.
///
/// Exceeding it is not an error; it usually means instance names are
/// being derived from unbounded input.
pub const MAX_INSTANCES: usize = 256;

/// Settings applied to every holder created by an
/// [`InstanceRegistry`](crate::InstanceRegistry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// URL stored as `og:url` in each new holder.
    #[serde(default)]
    pub default_url: String,

    /// Seed properties in write order. Keys are either a top-level name
    /// or a `parent:sub` structured key.
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl Settings {
    /// Settings with only a default URL.
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            default_url: default_url.into(),
            properties: IndexMap::new(),
        }
    }

    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, exceeds
    /// [`MAX_SETTINGS_SIZE`], or fails [`Settings::from_yaml_str`].
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        tracing::debug!(path = %path_ref.display(), "Loading Open Graph settings");

        let file_size = fs::metadata(path_ref)?.len() as usize;
        if file_size > MAX_SETTINGS_SIZE {
            tracing::warn!(
                size = file_size,
                max = MAX_SETTINGS_SIZE,
                "Settings file exceeds size limit"
            );
            return Err(OpenGraphError::ConfigError(format!(
                "File exceeds maximum size limit ({MAX_SETTINGS_SIZE} bytes)"
            )));
        }

        let content = fs::read_to_string(path_ref)?;
        Self::from_yaml_str(&content)
    }

    /// Parse settings from a YAML string.
    ///
    /// An empty document yields the default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Content exceeds [`MAX_SETTINGS_SIZE`]
    /// - YAML is invalid or has unknown fields
    /// - There are more than [`MAX_SEED_PROPERTIES`] seed properties
    /// - A seed key is not a valid property
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.len() > MAX_SETTINGS_SIZE {
            tracing::warn!(
                size = content.len(),
                max = MAX_SETTINGS_SIZE,
                "Settings content exceeds size limit"
            );
            return Err(OpenGraphError::ConfigError(format!(
                "Content exceeds maximum size limit ({MAX_SETTINGS_SIZE} bytes)"
            )));
        }

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_yaml_ng::from_str(content)?;
        settings.validate()?;

        tracing::debug!(
            default_url = %settings.default_url,
            properties = settings.properties.len(),
            "Parsed settings successfully"
        );

        Ok(settings)
    }

    /// Check seed limits and every seed key against the registry.
    ///
    /// `url` is rejected as a seed: each holder's `url` is the current page,
    /// which comes from `default_url`.
    pub fn validate(&self) -> Result<()> {
        if self.properties.len() > MAX_SEED_PROPERTIES {
            return Err(OpenGraphError::ConfigError(format!(
                "Too many seed properties ({}, max {MAX_SEED_PROPERTIES})",
                self.properties.len()
            )));
        }
        for key in self.properties.keys() {
            if key == "url" {
                return Err(OpenGraphError::ConfigError(
                    "Seed property 'url' is not allowed, use default_url".to_string(),
                ));
            }
            validate_key(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_reasonable() {
        assert!(MAX_SETTINGS_SIZE >= 4 * 1024, "Should allow small documents");
        assert!(MAX_SEED_PROPERTIES >= 34, "Should fit the whole whitelist");
        assert!(MAX_INSTANCES >= 16, "Should allow several page sections");
    }

    #[test]
    fn test_parse_settings() {
        let yaml = r#"
default_url: https://example.com/
properties:
  site_name: Example
  image:type: image/png
"#;
        let settings = Settings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.default_url, "https://example.com/");
        let keys: Vec<_> = settings.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["site_name", "image:type"]);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_yaml_str("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_invalid_seed_key() {
        let yaml = "properties:\n  dummy_prop: nope\n";
        let err = Settings::from_yaml_str(yaml).unwrap_err();
        assert!(err.is_invalid_property());

        let yaml = "properties:\n  audio:width: '300'\n";
        let err = Settings::from_yaml_str(yaml).unwrap_err();
        assert!(err.is_invalid_property());
    }

    #[test]
    fn test_rejects_url_seed() {
        let yaml = "default_url: http://cfg/\nproperties:\n  url: http://seed/\n";
        let err = Settings::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, OpenGraphError::ConfigError(ref m) if m.contains("default_url")));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = Settings::from_yaml_str("default_uri: x\n").unwrap_err();
        assert!(matches!(err, OpenGraphError::YamlError(_)));
    }

    #[test]
    fn test_rejects_oversized_content() {
        let yaml = format!("default_url: \"{}\"\n", "a".repeat(MAX_SETTINGS_SIZE));
        let err = Settings::from_yaml_str(&yaml).unwrap_err();
        assert!(matches!(err, OpenGraphError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_too_many_seeds() {
        let mut settings = Settings::new("https://example.com/");
        for i in 0..=MAX_SEED_PROPERTIES {
            settings.properties.insert(format!("title{i}"), String::new());
        }
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, OpenGraphError::ConfigError(_)));
    }
}
