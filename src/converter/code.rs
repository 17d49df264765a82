//! Fenced code block converter.

use super::{leaf_text, JsonToMarkdown};
use crate::error::Error;
use crate::Result;
use serde::Deserialize;
use serde_json::Value;

/// Contract payload shape: `{language?, content: string | [string]}`.
#[derive(Deserialize)]
struct CodeSpec {
    #[serde(default)]
    language: String,
    content: Value,
}

/// Renders a fenced code block. Content stays byte-exact; inline format
/// substitution never applies here.
pub fn code_block(input: &Value, _engine: &JsonToMarkdown) -> Result<String> {
    let spec: CodeSpec =
        serde_json::from_value(input.clone()).map_err(|source| Error::payload("code", source))?;
    let body = match &spec.content {
        Value::Array(lines) => lines
            .iter()
            .map(|line| leaf_text(line).unwrap_or_else(|| line.to_string()))
            .collect::<Vec<_>>()
            .join("\n"),
        other => leaf_text(other).unwrap_or_else(|| other.to_string()),
    };
    Ok(format!("```{}\n{}\n```", spec.language, body))
}
