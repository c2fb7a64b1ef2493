//! Tests for the `render` binary's JSON-over-stdin protocol.

use assert_cmd::Command;
use predicates::prelude::*;

fn render() -> Command {
    Command::cargo_bin("render").unwrap()
}

#[test]
fn test_renders_properties_in_order() {
    let request = r#"{
        "url": "https://example.com/",
        "properties": [
            {"name": "title", "value": "Example"},
            {"name": "image", "structured": "width", "value": "1200"}
        ]
    }"#;

    let output = render().write_stdin(request).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(response["namespace"], r#"xmlns:og="http://ogp.me/ns#""#);
    assert_eq!(
        response["html"],
        concat!(
            r#"<meta property="og:url" content="https://example.com/">"#,
            r#"<meta property="og:title" content="Example">"#,
            r#"<meta property="og:image:width" content="1200">"#,
        )
    );
    assert!(response.get("error").is_none());
}

#[test]
fn test_settings_and_escaping() {
    let request = r#"{
        "url": "https://example.com/a?b=1&c=2",
        "settings_yaml": "default_url: ignored\nproperties:\n  site_name: Example\n",
        "escape": true
    }"#;

    render()
        .write_stdin(request)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/a?b=1&amp;c=2"))
        .stdout(predicate::str::contains("og:site_name"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn test_invalid_property_fails() {
    let request = r#"{"url": "https://example.com/", "properties": [{"name": "dummy_prop", "value": "x"}]}"#;

    render()
        .write_stdin(request)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid property: 'dummy_prop'"))
        .stdout(predicate::str::contains("\"html\"").not());
}

#[test]
fn test_malformed_request_fails() {
    render()
        .write_stdin("not json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse request JSON"));
}
