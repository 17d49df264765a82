//! List converters: unordered, ordered and task lists.
//!
//! Items render recursively with a 4-space continuation indent; the first
//! line stays unindented because it carries the marker. An item that is
//! itself a nested list supplies its own markers and, for ordered lists,
//! does not consume a number, so true items stay contiguously numbered.

use super::JsonToMarkdown;
use crate::render::{indent, substitute_inline_formats};
use crate::Result;
use serde_json::Value;

const LIST_KINDS: [&str; 3] = ["ul", "ol", "taskLists"];

fn is_nested_list(item: &Value) -> bool {
    item.as_object()
        .and_then(|fields| fields.keys().next())
        .is_some_and(|kind| LIST_KINDS.contains(&kind.as_str()))
}

fn render_item(item: &Value, engine: &JsonToMarkdown) -> Result<String> {
    Ok(substitute_inline_formats(&indent(
        &engine.render(item, "")?,
        4,
        true,
    )))
}

pub fn unordered(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    let Some(items) = input.as_array() else {
        return Ok(String::new());
    };
    let mut out = String::new();
    for item in items {
        if !is_nested_list(item) {
            out.push_str("\n - ");
        }
        out.push_str(&render_item(item, engine)?);
    }
    Ok(out)
}

pub fn ordered(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    let Some(items) = input.as_array() else {
        return Ok(String::new());
    };
    let mut out = String::new();
    let mut number = 0usize;
    for item in items {
        if !is_nested_list(item) {
            number += 1;
            out.push_str(&format!("\n {number}. "));
        }
        out.push_str(&render_item(item, engine)?);
    }
    Ok(out)
}

pub fn tasks(input: &Value, engine: &JsonToMarkdown) -> Result<String> {
    let Some(items) = input.as_array() else {
        return Ok(String::new());
    };
    let mut out = String::new();
    for item in items {
        if !is_nested_list(item) {
            let done = item.get("done").and_then(Value::as_bool).unwrap_or(false);
            out.push_str(if done { "\n - [x] " } else { "\n - [ ] " });
        }
        let content = item.get("title").unwrap_or(item);
        out.push_str(&render_item(content, engine)?);
    }
    Ok(out)
}
