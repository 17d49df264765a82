//! Converter registry and the recursive render engine.

mod code;
mod heading;
mod image;
mod link;
mod list;
mod table;
mod text;

use crate::error::{Error, Result};
use crate::render::prefix_lines;
use futures::future::{self, BoxFuture};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Synchronous converter: renders one element payload to a Markdown fragment,
/// recursing through the engine it is handed for nested content.
pub type SyncConverter = dyn Fn(&Value, &JsonToMarkdown) -> Result<String> + Send + Sync;

/// Asynchronous converter for element kinds that need to await. Only reachable
/// through [`JsonToMarkdown::convert_async`].
pub type AsyncConverter =
    dyn Fn(Value, JsonToMarkdown) -> BoxFuture<'static, Result<String>> + Send + Sync;

#[derive(Clone)]
enum Converter {
    Sync(Arc<SyncConverter>),
    Async(Arc<AsyncConverter>),
}

/// Recursive JSON document tree to Markdown engine.
///
/// The converter registry is shared between clones, so a clone handed to an
/// asynchronous render observes the same registrations as the original.
/// Registering a kind while a render that depends on that same kind is in
/// flight is a caller responsibility.
#[derive(Clone)]
pub struct JsonToMarkdown {
    converters: Arc<RwLock<HashMap<String, Converter>>>,
}

impl Default for JsonToMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonToMarkdown {
    /// Creates an engine seeded with the built-in converter set:
    /// `h1`..`h6`, `blockquote`, `img`, `link`, `ul`, `ol`, `taskLists`,
    /// `code`, `p`, `table` and `hr`.
    pub fn new() -> Self {
        let engine = Self {
            converters: Arc::new(RwLock::new(HashMap::new())),
        };
        for level in 1..=6 {
            engine.register(&format!("h{level}"), heading::converter(level));
        }
        engine.register("blockquote", text::blockquote);
        engine.register("p", text::paragraph);
        engine.register("hr", text::horizontal_rule);
        engine.register("img", image::image);
        engine.register("link", link::link);
        engine.register("ul", list::unordered);
        engine.register("ol", list::ordered);
        engine.register("taskLists", list::tasks);
        engine.register("code", code::code_block);
        engine.register("table", table::table);
        engine
    }

    /// Registers (or overrides) a synchronous converter for `kind`.
    pub fn register<F>(&self, kind: &str, converter: F)
    where
        F: Fn(&Value, &JsonToMarkdown) -> Result<String> + Send + Sync + 'static,
    {
        self.write_registry()
            .insert(kind.to_string(), Converter::Sync(Arc::new(converter)));
    }

    /// Registers (or overrides) an asynchronous converter for `kind`.
    pub fn register_async<F>(&self, kind: &str, converter: F)
    where
        F: Fn(Value, JsonToMarkdown) -> BoxFuture<'static, Result<String>> + Send + Sync + 'static,
    {
        self.write_registry()
            .insert(kind.to_string(), Converter::Async(Arc::new(converter)));
    }

    /// Removes the converter for `kind`. Returns whether one was registered.
    pub fn unregister(&self, kind: &str) -> bool {
        self.write_registry().remove(kind).is_some()
    }

    /// Whether a converter is registered for `kind`.
    pub fn has_converter(&self, kind: &str) -> bool {
        self.read_registry().contains_key(kind)
    }

    /// Renders a document tree to Markdown with an empty line prefix.
    pub fn convert(&self, data: &Value) -> Result<String> {
        self.render(data, "")
    }

    /// Renders a document tree, prepending `prefix` to every output line.
    pub fn render(&self, data: &Value, prefix: &str) -> Result<String> {
        self.render_with(data, prefix, None)
    }

    /// Renders a document tree with an optional forced element kind.
    ///
    /// A forced kind makes every tagged node in `data` render as that kind
    /// with the whole node as payload, which is how an array nested directly
    /// under `img` or `link` becomes repeated images or links without a
    /// per-element wrapper.
    pub fn render_with(&self, data: &Value, prefix: &str, forced_kind: Option<&str>) -> Result<String> {
        match data {
            Value::Null => Ok(prefix_lines("", prefix)),
            Value::Bool(flag) => Ok(prefix_lines(&flag.to_string(), prefix)),
            Value::Number(number) => Ok(prefix_lines(&number.to_string(), prefix)),
            Value::String(text) => Ok(prefix_lines(text, prefix)),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let rendered = self.render_with(item, "", forced_kind)?;
                    parts.push(prefix_lines(&rendered, prefix));
                }
                Ok(parts.join("\n\n"))
            }
            Value::Object(fields) => {
                let kind = match forced_kind {
                    Some(kind) => kind.to_string(),
                    None => match fields.keys().next().cloned() {
                        Some(kind) => kind,
                        None => return Ok(String::new()),
                    },
                };
                let payload = match forced_kind {
                    Some(_) => data,
                    None => &fields[kind.as_str()],
                };
                let fragment = match self.lookup(&kind)? {
                    Converter::Sync(converter) => converter(payload, self)?,
                    Converter::Async(_) => return Err(Error::AsyncConverter(kind)),
                };
                Ok(format!("{}\n", prefix_lines(&fragment, prefix)))
            }
        }
    }

    /// Concurrency-preserving variant of [`convert`](Self::convert).
    ///
    /// Sibling array elements render concurrently; the joined output is
    /// always assembled in input index order. All siblings are awaited
    /// before a failure is surfaced, so the reported error is the first one
    /// in input order, never the first one to settle.
    pub fn convert_async(&self, data: Value) -> BoxFuture<'static, Result<String>> {
        self.render_async(data, "")
    }

    /// Concurrency-preserving variant of [`render`](Self::render).
    pub fn render_async(&self, data: Value, prefix: &str) -> BoxFuture<'static, Result<String>> {
        self.clone().render_async_with(data, prefix.to_string(), None)
    }

    fn render_async_with(
        self,
        data: Value,
        prefix: String,
        forced_kind: Option<String>,
    ) -> BoxFuture<'static, Result<String>> {
        Box::pin(async move {
            match data {
                Value::Null => Ok(prefix_lines("", &prefix)),
                Value::Bool(flag) => Ok(prefix_lines(&flag.to_string(), &prefix)),
                Value::Number(number) => Ok(prefix_lines(&number.to_string(), &prefix)),
                Value::String(text) => Ok(prefix_lines(&text, &prefix)),
                Value::Array(items) => {
                    let children: Vec<_> = items
                        .into_iter()
                        .map(|item| {
                            self.clone()
                                .render_async_with(item, String::new(), forced_kind.clone())
                        })
                        .collect();
                    let settled = future::join_all(children).await;
                    let mut parts = Vec::with_capacity(settled.len());
                    for result in settled {
                        parts.push(prefix_lines(&result?, &prefix));
                    }
                    Ok(parts.join("\n\n"))
                }
                Value::Object(fields) => {
                    let (kind, payload) = match forced_kind {
                        Some(kind) => (kind, Value::Object(fields)),
                        None => match fields.keys().next().cloned() {
                            Some(kind) => {
                                let payload =
                                    fields.get(kind.as_str()).cloned().unwrap_or(Value::Null);
                                (kind, payload)
                            }
                            None => return Ok(String::new()),
                        },
                    };
                    let fragment = match self.lookup(&kind)? {
                        Converter::Sync(converter) => converter(&payload, &self)?,
                        Converter::Async(converter) => converter(payload, self.clone()).await?,
                    };
                    Ok(format!("{}\n", prefix_lines(&fragment, &prefix)))
                }
            }
        })
    }

    fn lookup(&self, kind: &str) -> Result<Converter> {
        self.read_registry()
            .get(kind)
            .cloned()
            .ok_or_else(|| Error::UnknownConverter(kind.to_string()))
    }

    fn read_registry(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Converter>> {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Converter>> {
        self.converters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Stringifies a leaf value (string, number, bool; null is empty).
/// Returns `None` for arrays and objects.
pub(crate) fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        _ => None,
    }
}
