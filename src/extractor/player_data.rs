use crate::extractor::{Probe, clean};
use regex::Regex;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::sync::LazyLock;

/// The object literal YouTube assigns into an inline script on watch pages
static PLAYER_RESPONSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)ytInitialPlayerResponse\s*=\s*(\{.+?\});").unwrap());

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    video_details: Option<VideoDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoDetails {
    video_id: String,
    short_description: Option<String>,
}

/// Structured-data strategy: parse `ytInitialPlayerResponse` out of the
/// page's inline scripts.
///
/// The blob routinely describes the *previous* video for a while after an
/// SPA navigation, so the embedded `videoId` must match the requested one
/// before the description is trusted. A mismatch or a parse failure is not
/// an error for the caller; the driver falls through to the next strategy.
pub fn probe(doc: &Html, video_id: &str) -> Probe {
    let scripts = Selector::parse("script").unwrap();
    let mut last_error = None;

    for script in doc.select(&scripts) {
        let text: String = script.text().collect();
        if !text.contains("ytInitialPlayerResponse") {
            continue;
        }

        let Some(captures) = PLAYER_RESPONSE.captures(&text) else {
            continue;
        };

        match serde_json::from_str::<PlayerResponse>(&captures[1]) {
            Ok(response) => {
                let Some(details) = response.video_details else {
                    continue;
                };

                if details.video_id != video_id {
                    ::log::debug!(
                        "Player response is for video {}, wanted {}; ignoring",
                        details.video_id,
                        video_id
                    );
                    continue;
                }

                if let Some(description) = details
                    .short_description
                    .map(|d| clean::normalize_whitespace(&d))
                    .filter(|d| !d.is_empty())
                {
                    return Probe::Found(description);
                }
            }
            Err(err) => {
                last_error = Some(format!("failed to parse player response: {}", err));
            }
        }
    }

    match last_error {
        Some(err) => Probe::Error(err),
        None => Probe::NotFound,
    }
}
