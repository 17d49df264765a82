//! # treemd
//!
//! Renders a tree-shaped JSON description of document elements (headings,
//! lists, images, tables, code blocks, links, paragraphs) to Markdown text.
//!
//! Every node is either a leaf (string or number), an array of sibling
//! nodes, or a single-key object whose key names the element kind. Element
//! kinds map to converter functions in a registry callers can extend.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use treemd::JsonToMarkdown;
//!
//! let engine = JsonToMarkdown::new();
//! let markdown = engine
//!     .convert(&json!([
//!         { "h1": "Title" },
//!         { "ul": ["one", "two"] }
//!     ]))
//!     .unwrap();
//! assert!(markdown.starts_with("# Title\n"));
//! ```
//!
//! Custom element kinds plug into the same registry:
//!
//! ```
//! use serde_json::json;
//! use treemd::JsonToMarkdown;
//!
//! let engine = JsonToMarkdown::new();
//! engine.register("sayHello", |input, _engine| {
//!     Ok(format!("Hello {}!", input.as_str().unwrap_or_default()))
//! });
//! assert_eq!(
//!     engine.convert(&json!({ "sayHello": "World" })).unwrap(),
//!     "Hello World!\n"
//! );
//! ```

pub mod converter;
pub mod error;
pub mod render;

pub use converter::{AsyncConverter, JsonToMarkdown, SyncConverter};
pub use error::{Error, Result};

use serde_json::Value;

/// One-shot conversion with the built-in converter set.
pub fn convert(data: &Value) -> Result<String> {
    JsonToMarkdown::new().convert(data)
}
