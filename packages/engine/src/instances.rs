//! Named directory of property holders
//!
//! An [`InstanceRegistry`] maps instance names to [`PropertyHolder`]s so a
//! page can carry several independent property sets (e.g. one per page
//! section). Holders are created on first reference and are never replaced
//! afterwards. The holder named [`DEFAULT_INSTANCE`] backs the pass-through
//! operations (`add`, `set_title`, `render`, ...).
//!
//! The directory is a plain value: create one per request (or per test) and
//! pass it where it is needed.
//!
//! # Example
//!
//! ```
//! use opengraph_engine::InstanceRegistry;
//!
//! let mut graphs = InstanceRegistry::new("https://example.com/post/1");
//! graphs.set_title("First post")?.set_type("article")?;
//! graphs.forge("sidebar").set_title("Related")?;
//!
//! assert!(graphs.render().contains(r#"<meta property="og:title" content="First post">"#));
//! assert_eq!(graphs.len(), 2);
//! # Ok::<(), opengraph_engine::OpenGraphError>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::{Settings, DEFAULT_INSTANCE, MAX_INSTANCES};
use crate::error::Result;
use crate::holder::PropertyHolder;

/// Build a holder for `name`: current-page `url` first, then the seeds.
///
/// A `url` seed never replaces the current page URL.
fn create_holder(settings: &Settings, count: usize, name: &str) -> PropertyHolder {
    let mut holder = PropertyHolder::new(settings.default_url.clone());
    let seeds = settings
        .properties
        .iter()
        .filter(|(k, _)| k.as_str() != "url")
        .map(|(k, v)| (k.as_str(), v.as_str()));
    if let Err(e) = holder.extend_validated(seeds) {
        tracing::warn!(instance = %name, error = %e, "Ignoring invalid seed properties");
    }

    if count >= MAX_INSTANCES {
        tracing::warn!(
            current = count,
            max = MAX_INSTANCES,
            instance = %name,
            "Open Graph instance count exceeds limit"
        );
    }
    tracing::debug!(instance = %name, properties = holder.len(), "Created Open Graph instance");
    holder
}

/// Directory of named [`PropertyHolder`]s.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    instances: HashMap<String, PropertyHolder>,
    settings: Settings,
}

impl InstanceRegistry {
    /// Create an empty directory whose holders start with `default_url`.
    pub fn new(default_url: impl Into<String>) -> Self {
        Self::with_settings(Settings::new(default_url))
    }

    /// Create an empty directory from loaded settings.
    ///
    /// Seed properties are written into every holder the directory creates.
    /// `Settings` obtained from the YAML loaders are already validated; if the
    /// seeds fail validation anyway, none are written and a warning is logged.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            instances: HashMap::new(),
            settings,
        }
    }

    /// URL stored in holders created from now on.
    pub fn default_url(&self) -> &str {
        &self.settings.default_url
    }

    /// Change the URL used for holders created from now on.
    ///
    /// Existing holders keep their `url` property.
    pub fn set_default_url(&mut self, url: impl Into<String>) {
        self.settings.default_url = url.into();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Create and register a holder under `name`.
    ///
    /// If `name` is already registered, a warning is logged and the existing
    /// holder is returned untouched.
    pub fn forge(&mut self, name: &str) -> &mut PropertyHolder {
        if self.instances.contains_key(name) {
            tracing::warn!(
                instance = %name,
                "Open Graph instance with this name exists already, cannot be overwritten"
            );
        }
        self.instance(name)
    }

    /// [`forge`](Self::forge) the default instance.
    pub fn forge_default(&mut self) -> &mut PropertyHolder {
        self.forge(DEFAULT_INSTANCE)
    }

    /// Holder registered under `name`, created on demand.
    pub fn instance(&mut self, name: &str) -> &mut PropertyHolder {
        let count = self.instances.len();
        match self.instances.entry(name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(create_holder(&self.settings, count, name)),
        }
    }

    /// The default instance, created on demand.
    pub fn default_instance(&mut self) -> &mut PropertyHolder {
        self.instance(DEFAULT_INSTANCE)
    }

    /// Registered holder, without creating one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyHolder> {
        self.instances.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Registered instance names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    // Pass-through operations on the default instance

    pub fn add(&mut self, name: &str, value: impl Into<String>) -> Result<&mut PropertyHolder> {
        self.default_instance().add(name, value)
    }

    pub fn add_structured(
        &mut self,
        parent: &str,
        sub: &str,
        value: impl Into<String>,
    ) -> Result<&mut PropertyHolder> {
        self.default_instance().add_structured(parent, sub, value)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<&mut PropertyHolder> {
        self.default_instance().set_title(title)
    }

    pub fn set_type(&mut self, object_type: impl Into<String>) -> Result<&mut PropertyHolder> {
        self.default_instance().set_type(object_type)
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> Result<&mut PropertyHolder> {
        self.default_instance().set_url(url)
    }

    pub fn set_image(&mut self, image: impl Into<String>) -> Result<&mut PropertyHolder> {
        self.default_instance().set_image(image)
    }

    pub fn namespace_header(&mut self) -> &'static str {
        self.default_instance().namespace_header()
    }

    pub fn render(&mut self) -> String {
        self.default_instance().render()
    }
}
