use serde::{Deserialize, Serialize};

/// Result of one extraction cycle for a navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoUpdate {
    /// URL of the page the cycle ran against
    pub url: String,

    /// Video identifier, or None when the page has no active video
    pub video_id: Option<String>,

    /// Cleaned description text, or None if no strategy produced one
    pub description: Option<String>,

    /// Affiliate links found in the description, first-seen order, deduplicated
    pub links: Vec<String>,
}

impl VideoUpdate {
    /// Create a new update for a resolved extraction cycle
    pub fn new(
        url: String,
        video_id: Option<String>,
        description: Option<String>,
        links: Vec<String>,
    ) -> Self {
        Self {
            url,
            video_id,
            description,
            links,
        }
    }

    /// Update for a page with no active video (clears any prior output)
    pub fn no_video(url: String) -> Self {
        Self {
            url,
            video_id: None,
            description: None,
            links: Vec::new(),
        }
    }
}
