use url::Url;

/// Navigation state for one watched browser session.
///
/// The monitor owns one of these for the lifetime of the watch. Every
/// detected navigation bumps the generation counter; extraction cycles
/// capture the generation they started with and become no-ops once a newer
/// navigation supersedes them.
#[derive(Debug)]
pub struct WatchSession {
    last_url: String,
    current_video: Option<String>,
    generation: u64,
}

/// Snapshot handed to an extraction cycle when a navigation is observed.
#[derive(Debug, Clone)]
pub struct NavigationEvent {
    /// URL the session navigated to
    pub url: String,

    /// Video identifier from the `v` query parameter, if the page has one
    pub video_id: Option<String>,

    /// Generation this navigation belongs to
    pub generation: u64,
}

impl WatchSession {
    /// Create a fresh session with no observed URL
    pub fn new() -> Self {
        Self {
            last_url: String::new(),
            current_video: None,
            generation: 0,
        }
    }

    /// Compare the given location against the last observed one.
    ///
    /// Returns `None` when the URL is unchanged (the common case - many
    /// page mutations collapse into one comparison). On a change, records
    /// the new location, advances the generation and returns the event the
    /// caller should start a cycle for.
    pub fn observe(&mut self, url: &str) -> Option<NavigationEvent> {
        if url == self.last_url {
            return None;
        }

        self.last_url = url.to_string();
        self.generation += 1;
        self.current_video = video_id_from_url(url);

        ::log::debug!(
            "Navigation detected (generation {}): {}",
            self.generation,
            url
        );

        Some(NavigationEvent {
            url: url.to_string(),
            video_id: self.current_video.clone(),
            generation: self.generation,
        })
    }

    /// Whether a cycle started at `generation` is still the active one
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Identifier of the currently displayed video, if any
    pub fn current_video(&self) -> Option<&str> {
        self.current_video.as_deref()
    }
}

impl Default for WatchSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the video identifier from a watch page URL.
///
/// The `v` query parameter is the sole source of video identity; its
/// absence means "no active video", which is a valid state rather than an
/// error.
pub fn video_id_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_from_url() {
        assert_eq!(
            video_id_from_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );

        // The v parameter can appear after other parameters
        assert_eq!(
            video_id_from_url("https://www.youtube.com/watch?list=PL123&v=abc123"),
            Some("abc123".to_string())
        );

        // Pages without a v parameter have no active video
        assert_eq!(video_id_from_url("https://www.youtube.com/feed/trending"), None);
        assert_eq!(video_id_from_url("https://www.youtube.com/watch?v="), None);

        // Unparseable locations are treated the same way
        assert_eq!(video_id_from_url("not a url"), None);
    }

    #[test]
    fn test_observe_detects_changes_once() {
        let mut session = WatchSession::new();

        let event = session
            .observe("https://www.youtube.com/watch?v=abc")
            .expect("first observation should be a change");
        assert_eq!(event.video_id.as_deref(), Some("abc"));
        assert_eq!(event.generation, 1);

        // Repeated observations of the same URL coalesce to nothing
        assert!(session.observe("https://www.youtube.com/watch?v=abc").is_none());
        assert!(session.observe("https://www.youtube.com/watch?v=abc").is_none());

        let event = session
            .observe("https://www.youtube.com/watch?v=def")
            .expect("new URL should be a change");
        assert_eq!(event.video_id.as_deref(), Some("def"));
        assert_eq!(event.generation, 2);
        assert_eq!(session.current_video(), Some("def"));
    }

    #[test]
    fn test_staleness() {
        let mut session = WatchSession::new();

        let first = session.observe("https://www.youtube.com/watch?v=abc").unwrap();
        assert!(session.is_current(first.generation));

        let second = session.observe("https://www.youtube.com/watch?v=def").unwrap();
        assert!(!session.is_current(first.generation));
        assert!(session.is_current(second.generation));
    }

    #[test]
    fn test_navigation_away_from_watch_page() {
        let mut session = WatchSession::new();
        session.observe("https://www.youtube.com/watch?v=abc").unwrap();

        let event = session
            .observe("https://www.youtube.com/feed/subscriptions")
            .expect("leaving the watch page is still a navigation");
        assert_eq!(event.video_id, None);
        assert_eq!(session.current_video(), None);
    }
}
