//! Line-oriented text utilities shared by the converters.

mod escape;
mod format;
mod indent;

pub use self::escape::escape_table_pipes;
pub use self::format::substitute_inline_formats;
pub use self::indent::{indent, prefix_lines};
