use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Full marketplace URLs across the country domains Amazon operates
static MARKETPLACE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)https?://(?:www\.)?amazon\.(?:com|co\.uk|de|fr|es|it|ca|com\.au|co\.jp|in|com\.br|com\.mx|nl|sg|ae|sa|se|pl|eg|tr)/[^\s<>"']+"#,
    )
    .unwrap()
});

/// amzn.to short links
static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)https?://amzn\.to/[^\s<>"']+"#).unwrap());

/// smile.amazon.* alias still present in older descriptions
static SMILE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)https?://smile\.amazon\.[a-z.]+/[^\s<>"']+"#).unwrap());

/// Punctuation that belongs to the surrounding prose, not the link
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Scans text for Amazon affiliate links.
///
/// Patterns are checked in a fixed order and matches are deduplicated on
/// the cleaned string, preserving first-seen order. Matching is
/// case-insensitive but the returned links keep their original case, so
/// two links differing only by path case stay distinct. Pure and
/// synchronous; empty input yields an empty list.
pub fn scan(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for pattern in [&*MARKETPLACE_URL, &*SHORT_LINK, &*SMILE_URL] {
        for found in pattern.find_iter(text) {
            let cleaned = found.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if seen.insert(cleaned.to_string()) {
                links.push(cleaned.to_string());
            }
        }
    }

    ::log::debug!("Link scan found {} unique links", links.len());

    links
}
