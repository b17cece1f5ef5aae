use regex::Regex;
use std::sync::LazyLock;

/// Expander toggle labels rendered inside the description element
static EXPANDER_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)show more|show less").unwrap());

/// Chapter timestamps like 0:42 or 12:05
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2}\b").unwrap());

/// Runs of three or more periods left behind by truncated snippets
static ELLIPSIS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());

/// Collapses all whitespace runs to single spaces and trims
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleans text scraped from a rendered description element.
///
/// Strips the "Show more"/"Show less" expander labels, chapter timestamps
/// and ellipsis runs, then collapses whitespace.
pub fn clean_rendered_text(text: &str) -> String {
    let text = EXPANDER_TOKENS.replace_all(text, " ");
    let text = TIMESTAMP.replace_all(&text, " ");
    let text = ELLIPSIS_RUN.replace_all(&text, " ");
    normalize_whitespace(&text)
}
