pub mod clean;
pub mod dom_text;
pub mod player_data;

#[cfg(test)]
mod tests;

use scraper::Html;

/// Outcome of one extraction strategy
#[derive(Debug, Clone)]
pub enum Probe {
    /// Strategy produced usable description text
    Found(String),
    /// Strategy ran but the page had nothing for it
    NotFound,
    /// Strategy hit malformed data; treated like NotFound by the driver
    Error(String),
}

type Strategy = fn(&Html, &str) -> Probe;

/// Strategies in priority order; the first Found wins
const STRATEGIES: &[(&str, Strategy)] = &[
    ("player-response", player_data::probe),
    ("dom-text", dom_text::probe),
];

/// Extracts the description for a video from a serialized page snapshot.
///
/// Strategies are tried in priority order. Malformed data in one strategy
/// is logged and falls through to the next; nothing here surfaces an error
/// to the caller. Returns `None` when no strategy produced text, which a
/// caller may treat as transient and retry against a fresher snapshot.
pub fn extract_description(html: &str, video_id: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    for (name, strategy) in STRATEGIES {
        match strategy(&doc, video_id) {
            Probe::Found(text) => {
                ::log::debug!(
                    "Strategy {} produced {} chars for video {}",
                    name,
                    text.len(),
                    video_id
                );
                return Some(text);
            }
            Probe::NotFound => {
                ::log::trace!("Strategy {} found nothing for video {}", name, video_id);
            }
            Probe::Error(err) => {
                ::log::debug!("Strategy {} failed for video {}: {}", name, video_id, err);
            }
        }
    }

    None
}
