//! Open Graph property holder
//!
//! A [`PropertyHolder`] is an ordered bag of `key -> value` pairs in which
//! every key has been checked against the [`registry`](crate::registry).
//! Keys are either a top-level property (`title`) or a structured key
//! (`image:width`). Writing an existing key overwrites its value in place,
//! so rendering order is the order in which keys were first written.
//!
//! # Escaping
//!
//! [`PropertyHolder::render`] embeds values verbatim; callers must sanitize
//! untrusted values first. [`PropertyHolder::render_escaped`] applies HTML
//! attribute escaping to values instead.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{OpenGraphError, Result};
use crate::registry::{self, NAMESPACE_PREFIX};

/// Validate a holder key: either a top-level property or `parent:sub`.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    match key.split_once(':') {
        Some((parent, sub)) => {
            if registry::is_valid_structured_property(parent, sub) {
                Ok(())
            } else {
                Err(OpenGraphError::InvalidStructuredProperty {
                    property: parent.to_string(),
                    structured: sub.to_string(),
                })
            }
        }
        None => {
            if registry::is_valid_property(key) {
                Ok(())
            } else {
                Err(OpenGraphError::InvalidProperty(key.to_string()))
            }
        }
    }
}

/// Validated, ordered collection of Open Graph properties for one page.
///
/// # Example
///
/// ```
/// use opengraph_engine::PropertyHolder;
///
/// let mut og = PropertyHolder::new("https://example.com/");
/// og.set_title("Example")?
///     .set_type("website")?
///     .add_structured("image", "width", "1200")?;
///
/// assert_eq!(
///     og.render(),
///     concat!(
///         r#"<meta property="og:url" content="https://example.com/">"#,
///         r#"<meta property="og:title" content="Example">"#,
///         r#"<meta property="og:type" content="website">"#,
///         r#"<meta property="og:image:width" content="1200">"#,
///     )
/// );
/// # Ok::<(), opengraph_engine::OpenGraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyHolder {
    entries: IndexMap<String, String>,
}

impl PropertyHolder {
    /// Create a holder whose `url` property is `default_url`.
    #[must_use]
    pub fn new(default_url: impl Into<String>) -> Self {
        let mut entries = IndexMap::new();
        entries.insert("url".to_string(), default_url.into());
        Self { entries }
    }

    fn insert(&mut self, key: String, value: String) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Set a top-level property.
    ///
    /// # Errors
    ///
    /// Returns [`OpenGraphError::InvalidProperty`] if `name` is not in any
    /// property category. The holder is left unchanged.
    pub fn add(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        if !registry::is_valid_property(name) {
            return Err(OpenGraphError::InvalidProperty(name.to_string()));
        }
        Ok(self.insert(name.to_string(), value.into()))
    }

    /// Set a structured property, stored under `parent:sub`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenGraphError::InvalidStructuredProperty`] if `sub` is not
    /// allowed under `parent`. The holder is left unchanged.
    pub fn add_structured(
        &mut self,
        parent: &str,
        sub: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        if !registry::is_valid_structured_property(parent, sub) {
            return Err(OpenGraphError::InvalidStructuredProperty {
                property: parent.to_string(),
                structured: sub.to_string(),
            });
        }
        Ok(self.insert(format!("{parent}:{sub}"), value.into()))
    }

    /// Apply several `key -> value` pairs at once.
    ///
    /// Keys use the stored form (`title`, `image:width`). All keys are
    /// validated before anything is written.
    pub fn extend_validated<I, K, V>(&mut self, pairs: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        for (key, _) in &pairs {
            validate_key(key)?;
        }
        self.entries.extend(pairs);
        Ok(self)
    }

    /// Set the page title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<&mut Self> {
        self.add("title", title)
    }

    /// Set the object type.
    ///
    /// Types outside the protocol's list are accepted but logged.
    pub fn set_type(&mut self, object_type: impl Into<String>) -> Result<&mut Self> {
        let object_type = object_type.into();
        if !registry::is_known_type(&object_type) {
            tracing::debug!(object_type = %object_type, "Unknown Open Graph object type");
        }
        self.add("type", object_type)
    }

    /// Set the canonical page URL, replacing the construction-time one.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<&mut Self> {
        self.add("url", url)
    }

    /// Set the image URL.
    pub fn set_image(&mut self, image: impl Into<String>) -> Result<&mut Self> {
        self.add("image", image)
    }

    /// The namespace attribute for the root `<html>` element.
    pub fn namespace_header(&self) -> &'static str {
        registry::namespace_attribute()
    }

    /// Value stored under `key` (`title`, `image:width`, ...).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a property, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render all properties as `<meta>` tags, values verbatim.
    pub fn render(&self) -> String {
        self.render_with(Cow::Borrowed)
    }

    /// Render all properties as `<meta>` tags with HTML-escaped values.
    pub fn render_escaped(&self) -> String {
        self.render_with(|value| html_escape::encode_double_quoted_attribute(value))
    }

    fn render_with<'a, F>(&'a self, encode: F) -> String
    where
        F: Fn(&'a str) -> Cow<'a, str>,
    {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(&format!(
                r#"<meta property="{NAMESPACE_PREFIX}:{key}" content="{}">"#,
                encode(value.as_str())
            ));
        }
        out
    }
}

impl fmt::Display for PropertyHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
