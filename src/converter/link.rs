//! Link converter.

use super::JsonToMarkdown;
use crate::error::Error;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;

/// Contract payload shape: `{source, title?}`.
#[derive(Deserialize)]
struct LinkSpec {
    source: String,
    #[serde(default)]
    title: String,
}

/// Renders a link from a mapping, a bare source string, or an array of
/// either (rendered as repeated links through the forced-kind mechanism).
pub fn link(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    if input.is_array() {
        return engine.render_with(input, "", Some("link"));
    }
    if let Some(source) = input.as_str() {
        return Ok(format!("[]({source})"));
    }
    let spec: LinkSpec =
        serde_json::from_value(input.clone()).map_err(|source| Error::payload("link", source))?;
    Ok(format!("[{}]({})", spec.title, spec.source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_mapping() {
        let engine = JsonToMarkdown::new();
        assert_eq!(
            engine
                .convert(&json!({"link": {"source": "https://example.com", "title": "hello"}}))
                .unwrap(),
            "[hello](https://example.com)\n"
        );
    }

    #[test]
    fn test_link_bare_string_is_the_source() {
        let engine = JsonToMarkdown::new();
        assert_eq!(
            engine.convert(&json!({"link": "https://example.com"})).unwrap(),
            "[](https://example.com)\n"
        );
    }

    #[test]
    fn test_link_array_renders_each_element() {
        let engine = JsonToMarkdown::new();
        let out = engine
            .convert(&json!({"link": [
                {"source": "https://a", "title": "a"},
                {"source": "https://b", "title": "b"}
            ]}))
            .unwrap();
        assert_eq!(out, "[a](https://a)\n\n\n[b](https://b)\n\n");
    }
}
