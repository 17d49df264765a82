//! Image converter.

use super::JsonToMarkdown;
use crate::error::Error;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;

/// Contract payload shape: `{source, title?, alt?}`.
#[derive(Deserialize)]
struct ImageSpec {
    source: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    alt: String,
}

impl ImageSpec {
    fn from_source(source: &str) -> Self {
        Self {
            source: source.to_string(),
            title: String::new(),
            alt: String::new(),
        }
    }

    // Fixed template: empty alt/title still produce the surrounding syntax.
    fn to_markdown(&self) -> String {
        format!("![{}]({} \"{}\")", self.alt, self.source, self.title)
    }
}

/// Renders an image from a mapping, a bare source string, or an array of
/// either (rendered as repeated images through the forced-kind mechanism).
pub fn image(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    if input.is_array() {
        return engine.render_with(input, "", Some("img"));
    }
    if let Some(source) = input.as_str() {
        return Ok(ImageSpec::from_source(source).to_markdown());
    }
    let spec: ImageSpec =
        serde_json::from_value(input.clone()).map_err(|source| Error::payload("img", source))?;
    Ok(spec.to_markdown())
}
