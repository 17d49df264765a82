//! Paragraph, blockquote and horizontal rule converters.

use super::JsonToMarkdown;
use crate::render::substitute_inline_formats;
use crate::Result;
use serde_json::Value;

/// Blockquote: every line of the rendered content gets a `"> "` prefix,
/// blank lines included, so multi-paragraph quotes stay quoted throughout.
pub fn blockquote(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    engine.render(input, "> ")
}

/// Paragraph: leading newline separates it from preceding content; inline
/// format tags are substituted in the rendered text.
pub fn paragraph(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    Ok(format!(
        "\n{}",
        substitute_inline_formats(&engine.render(input, "")?)
    ))
}

/// Horizontal rule. The payload carries no information and is ignored.
pub fn horizontal_rule(_input: &Value, _engine: &JsonToMarkdown) -> Result<String> {
    Ok("---".to_string())
}
