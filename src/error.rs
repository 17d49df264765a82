//! Error types for treemd.

use thiserror::Error;

/// Result type for treemd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document tree to Markdown.
#[derive(Error, Debug)]
pub enum Error {
    /// A tagged node names an element kind with no registered converter.
    #[error("There is no such converter: {0}")]
    UnknownConverter(String),

    /// An asynchronous converter was reached from the synchronous entry point.
    #[error("Converter `{0}` is asynchronous; render through convert_async")]
    AsyncConverter(String),

    /// A structured payload (code, image, link) did not match its contract shape.
    #[error("Invalid payload for `{kind}`: {source}")]
    Payload {
        kind: String,
        source: serde_json::Error,
    },

    /// Free-form failure raised by a converter.
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input document was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Builds a payload error for the given element kind.
    pub(crate) fn payload(kind: &str, source: serde_json::Error) -> Self {
        Error::Payload {
            kind: kind.to_string(),
            source,
        }
    }
}
