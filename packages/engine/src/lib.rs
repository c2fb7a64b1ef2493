//! Open Graph Engine
//!
//! Builds Open Graph (<https://ogp.me/>) metadata for a web page and renders
//! it as HTML `<meta>` tags. This library provides:
//! - A registry of valid property names, flat and structured
//! - A property holder that validates every write against that registry
//! - A directory of named holders with create-on-demand lookup
//!
//! # Example
//!
//! ```
//! use opengraph_engine::InstanceRegistry;
//!
//! let mut graphs = InstanceRegistry::new("https://example.com/");
//! graphs
//!     .set_title("Example")?
//!     .set_type("website")?
//!     .add_structured("image", "url", "https://example.com/logo.png")?;
//!
//! let html_attr = graphs.namespace_header();
//! let head = graphs.render();
//! assert_eq!(html_attr, r#"xmlns:og="http://ogp.me/ns#""#);
//! assert!(head.contains(r#"<meta property="og:image:url" content="https://example.com/logo.png">"#));
//! # Ok::<(), opengraph_engine::OpenGraphError>(())
//! ```

pub mod config;
pub mod error;
pub mod holder;
pub mod instances;
pub mod registry;

// Re-export commonly used items
pub use config::{Settings, DEFAULT_INSTANCE};
pub use error::{OpenGraphError, Result};
pub use holder::PropertyHolder;
pub use instances::InstanceRegistry;
pub use registry::{
    is_known_type, is_valid_property, is_valid_structured_property, namespace_attribute,
    PropertyCategory,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        let _holder = PropertyHolder::new("http://localhost/");
        let _category = PropertyCategory::Basic;
        let _err = OpenGraphError::InvalidProperty("x".to_string());
        assert_eq!(DEFAULT_INSTANCE, "default");
    }
}
