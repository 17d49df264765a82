/// Prepends `prefix` to every line of `content`, empty lines included, so
/// blockquote-style wrapping keeps the blank-line structure of the block.
pub fn prefix_lines(content: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return content.to_string();
    }
    content
        .split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indents `content` by `width` spaces per line. With `ignore_first_line` the
/// first line is left untouched, so a list marker stays on its own column
/// while continuation lines move under it.
pub fn indent(content: &str, width: usize, ignore_first_line: bool) -> String {
    let pad = " ".repeat(width);
    if !ignore_first_line {
        return prefix_lines(content, &pad);
    }
    match content.split_once('\n') {
        None => content.to_string(),
        Some((first, rest)) => format!("{first}\n{}", prefix_lines(rest, &pad)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_lines_applies_to_every_line() {
        assert_eq!(prefix_lines("a\n\nb", "> "), "> a\n> \n> b");
    }

    #[test]
    fn test_prefix_lines_empty_prefix_is_identity() {
        assert_eq!(prefix_lines("a\nb", ""), "a\nb");
    }

    #[test]
    fn test_indent_all_lines() {
        assert_eq!(indent("a\nb", 2, false), "  a\n  b");
    }

    #[test]
    fn test_indent_ignores_first_line() {
        assert_eq!(indent("marker line\ncont", 4, true), "marker line\n    cont");
    }

    #[test]
    fn test_indent_single_line_idempotent_when_ignoring_first() {
        let once = indent("only", 4, true);
        assert_eq!(once, "only");
        assert_eq!(indent(&once, 4, true), "only");
    }
}
