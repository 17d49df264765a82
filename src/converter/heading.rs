//! Heading converters for levels 1 through 6.

use super::JsonToMarkdown;
use crate::Result;
use serde_json::Value;

/// Builds the converter for one heading level: `#` repeated `level` times,
/// a space, then the recursively rendered heading content.
pub fn converter(
    level: usize,
) -> impl Fn(&Value, &JsonToMarkdown) -> Result<String> + Send + Sync + 'static {
    move |input, engine| Ok(format!("{} {}", "#".repeat(level), engine.render(input, "")?))
}
