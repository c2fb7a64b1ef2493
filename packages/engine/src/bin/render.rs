//! CLI binary for rendering Open Graph tags via stdin.
//!
//! Usage:
//!   echo '{"url": "https://example.com/", "properties": [{"name": "title", "value": "Example"}]}' \
//!     | cargo run --bin render
//!
//! Input (JSON on stdin):
//!   - url (String): the current page URL, stored as `og:url` unless overridden
//!   - properties (Array): `{name, structured?, value}` entries, applied in order
//!   - settings_yaml (Optional<String>): settings document with seed properties
//!   - escape (Optional<bool>): HTML-escape values (default: false)
//!
//! Output (JSON on stdout):
//!   - namespace (String): attribute for the `<html>` element
//!   - html (String): the rendered `<meta>` tags
//!   - error (Optional<String>): error message if rendering failed
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default: warn).

use opengraph_engine::{InstanceRegistry, Settings};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(serde::Deserialize)]
struct RenderRequest {
    url: String,
    #[serde(default)]
    properties: Vec<PropertyInput>,
    #[serde(default)]
    settings_yaml: Option<String>,
    #[serde(default)]
    escape: bool,
}

#[derive(serde::Deserialize)]
struct PropertyInput {
    name: String,
    #[serde(default)]
    structured: Option<String>,
    value: String,
}

#[derive(serde::Serialize)]
struct RenderResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn error_response(msg: String) -> RenderResponse {
    RenderResponse {
        namespace: None,
        html: None,
        error: Some(msg),
    }
}

fn fail(msg: String) -> ! {
    tracing::error!(error = %msg, "Render request failed");
    println!(
        "{}",
        serde_json::to_string(&error_response(msg)).unwrap_or_default()
    );
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        fail(format!("Failed to read stdin: {e}"));
    }

    let request: RenderRequest = match serde_json::from_str(&input) {
        Ok(r) => r,
        Err(e) => fail(format!("Failed to parse request JSON: {e}")),
    };

    let mut settings = match request.settings_yaml.as_deref() {
        Some(yaml) => match Settings::from_yaml_str(yaml) {
            Ok(s) => s,
            Err(e) => fail(format!("Failed to load settings: {e}")),
        },
        None => Settings::default(),
    };
    // The request URL is the current page; it wins over the configured one
    settings.default_url = request.url;

    let mut graphs = InstanceRegistry::with_settings(settings);
    let holder = graphs.default_instance();

    for property in &request.properties {
        let result = match property.structured.as_deref() {
            Some(sub) => holder.add_structured(&property.name, sub, property.value.as_str()),
            None => holder.add(&property.name, property.value.as_str()),
        };
        if let Err(e) = result {
            fail(format!("{e}"));
        }
    }

    let html = if request.escape {
        holder.render_escaped()
    } else {
        holder.render()
    };

    let resp = RenderResponse {
        namespace: Some(holder.namespace_header().to_string()),
        html: Some(html),
        error: None,
    };
    println!("{}", serde_json::to_string(&resp).unwrap_or_default());
}
