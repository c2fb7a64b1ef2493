//! Error types for the Open Graph engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum OpenGraphError {
    /// Property name is not part of any Open Graph category
    #[error("Invalid property: '{0}'")]
    InvalidProperty(String),

    /// Structured property is not allowed under its parent
    #[error("Invalid structured property: '{property}:{structured}'")]
    InvalidStructuredProperty {
        property: String,
        structured: String,
    },

    /// Settings are malformed or exceed a limit
    #[error("Invalid settings: {0}")]
    ConfigError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OpenGraphError {
    /// True for both flat and structured property-name rejections.
    pub fn is_invalid_property(&self) -> bool {
        matches!(
            self,
            OpenGraphError::InvalidProperty(_) | OpenGraphError::InvalidStructuredProperty { .. }
        )
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, OpenGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OpenGraphError::InvalidProperty("dummy_prop".to_string());
        assert_eq!(err.to_string(), "Invalid property: 'dummy_prop'");
    }

    #[test]
    fn test_structured_error_display() {
        let err = OpenGraphError::InvalidStructuredProperty {
            property: "image".to_string(),
            structured: "depth".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid structured property: 'image:depth'");
    }

    #[test]
    fn test_is_invalid_property() {
        assert!(OpenGraphError::InvalidProperty("x".into()).is_invalid_property());
        assert!(OpenGraphError::InvalidStructuredProperty {
            property: "audio".into(),
            structured: "width".into(),
        }
        .is_invalid_property());
        assert!(!OpenGraphError::ConfigError("too big".into()).is_invalid_property());
    }
}
