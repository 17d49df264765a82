use once_cell::sync::Lazy;
use regex::Regex;

static STRONG_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:strong|bold)>").expect("strong pattern is valid"));
static ITALIC_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?(?:em|italic)>").expect("italic pattern is valid"));
static UNDERLINE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?u>").expect("underline pattern is valid"));
static STRIKE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?strike>").expect("strike pattern is valid"));

/// Replaces paired HTML-ish formatting tags with Markdown emphasis syntax:
/// strong/bold to `**`, em/italic to `*`, u to `_`, strike to `~~`.
///
/// Applied to free-text content only (paragraphs, list items, table cells).
/// Code block content must stay byte-exact and never goes through here.
pub fn substitute_inline_formats(text: &str) -> String {
    let text = STRONG_TAG.replace_all(text, "**");
    let text = ITALIC_TAG.replace_all(&text, "*");
    let text = UNDERLINE_TAG.replace_all(&text, "_");
    STRIKE_TAG.replace_all(&text, "~~").into_owned()
}
