use crate::extractor::{Probe, clean};
use scraper::{Html, Selector};

/// Selectors for the rendered description, current UI first, legacy
/// fallbacks last
const DESCRIPTION_SELECTORS: &[&str] = &[
    "ytd-text-inline-expander #plain-snippet-text",
    "ytd-text-inline-expander #snippet-text",
    "#description ytd-text-inline-expander .content",
    "#description .content.style-scope.ytd-expandable-video-description-body-renderer",
    "ytd-expandable-video-description-body-renderer .content",
    "#description-inline-expander .content",
    "#description .content",
    "#description-text",
    ".content.style-scope.ytd-expandable-video-description-body-renderer",
];

/// Cleaned text shorter than this is a stub (an empty expander, a lone
/// timestamp) rather than a description
const MIN_TEXT_LEN: usize = 10;

/// DOM-text strategy: probe the selector list for the first element with
/// usable rendered text.
///
/// Only the first element matching each selector is considered, mirroring
/// how the page lays out a single description node. Text that cleans down
/// to a stub keeps the probe moving to the next selector.
pub fn probe(doc: &Html, _video_id: &str) -> Probe {
    for raw in DESCRIPTION_SELECTORS {
        let Ok(selector) = Selector::parse(raw) else {
            ::log::warn!("Unparseable description selector: {}", raw);
            continue;
        };

        let Some(element) = doc.select(&selector).next() else {
            continue;
        };

        let text: String = element.text().collect::<Vec<_>>().join(" ");
        if text.trim().is_empty() {
            continue;
        }

        let cleaned = clean::clean_rendered_text(&text);
        if cleaned.len() > MIN_TEXT_LEN {
            ::log::trace!("Selector matched: {}", raw);
            return Probe::Found(cleaned);
        }
    }

    Probe::NotFound
}
