pub mod source;

use crate::config::WatchConfig;
use crate::extractor;
use crate::links;
use crate::results::VideoUpdate;
use crate::session::{NavigationEvent, WatchSession};
use source::PageSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};

/// Starts watching a page source and returns a receiver that yields a
/// VideoUpdate per detected navigation.
///
/// The monitor compares the session's URL on a fixed interval, so any
/// number of in-page mutations between two checks collapse into a single
/// comparison. Each navigation starts one extraction cycle; a cycle whose
/// generation has been superseded produces no output. The loop ends when
/// the receiver is dropped.
pub fn start<S>(page: S, config: &WatchConfig) -> mpsc::Receiver<VideoUpdate>
where
    S: PageSource + 'static,
{
    ::log::info!("Starting page monitor for: {}", config.start_url);

    let (update_tx, update_rx) = mpsc::channel::<VideoUpdate>(64);
    let page = Arc::new(page);
    let session = Arc::new(Mutex::new(WatchSession::new()));
    let config = config.clone();

    tokio::spawn(async move {
        let poll_interval = Duration::from_millis(config.poll_interval_ms);

        loop {
            if update_tx.is_closed() {
                ::log::info!("Update receiver dropped, stopping page monitor");
                break;
            }

            // The first pass observes the initial location; later passes
            // only react to changes
            if let Some(url) = page.current_url().await {
                let event = {
                    let mut session = session.lock().await;
                    session.observe(&url)
                };

                if let Some(event) = event {
                    dispatch_cycle(
                        Arc::clone(&page),
                        Arc::clone(&session),
                        event,
                        &config,
                        update_tx.clone(),
                    )
                    .await;
                }
            }

            tokio::time::sleep(poll_interval).await;
        }
    });

    update_rx
}

/// Starts the extraction cycle for one navigation event
async fn dispatch_cycle<S>(
    page: Arc<S>,
    session: Arc<Mutex<WatchSession>>,
    event: NavigationEvent,
    config: &WatchConfig,
    update_tx: mpsc::Sender<VideoUpdate>,
) where
    S: PageSource + 'static,
{
    match event.video_id {
        // No v parameter: valid "no active video" state, emitted at once
        // so consumers clear any prior output
        None => {
            if let Err(e) = update_tx.send(VideoUpdate::no_video(event.url)).await {
                ::log::debug!("Failed to send no-video update: {}", e);
            }
        }
        Some(video_id) => {
            ::log::info!("Video changed to {}, starting extraction", video_id);
            let url = event.url;
            let generation = event.generation;
            let config = config.clone();
            tokio::spawn(async move {
                run_cycle(page, session, url, video_id, generation, &config, update_tx).await;
            });
        }
    }
}

/// One bounded-retry extraction cycle for a single video.
///
/// The staleness predicate is re-checked before every attempt and again
/// before the result is sent: a cycle that has been superseded by a newer
/// navigation must not produce observable output, no matter when its
/// attempts resolve.
pub(crate) async fn run_cycle<S>(
    page: Arc<S>,
    session: Arc<Mutex<WatchSession>>,
    url: String,
    video_id: String,
    generation: u64,
    config: &WatchConfig,
    update_tx: mpsc::Sender<VideoUpdate>,
) where
    S: PageSource,
{
    let retry_delay = Duration::from_millis(config.retry_delay_ms);

    for attempt in 0..config.max_attempts {
        if !session.lock().await.is_current(generation) {
            ::log::debug!("Cycle for {} superseded, dropping", video_id);
            return;
        }

        if let Some(html) = page.page_html().await {
            if let Some(description) = extractor::extract_description(&html, &video_id) {
                let found_links = links::scan(&description);

                // Re-check after the async snapshot: a navigation may have
                // landed while we were extracting
                if !session.lock().await.is_current(generation) {
                    ::log::debug!("Cycle for {} superseded after extraction, dropping", video_id);
                    return;
                }

                ::log::info!(
                    "Found {} links for video {} (attempt {})",
                    found_links.len(),
                    video_id,
                    attempt + 1
                );

                let update =
                    VideoUpdate::new(url, Some(video_id), Some(description), found_links);
                if let Err(e) = update_tx.send(update).await {
                    ::log::debug!("Failed to send update: {}", e);
                }
                return;
            }
        }

        if attempt + 1 < config.max_attempts {
            tokio::time::sleep(retry_delay).await;
        }
    }

    ::log::info!(
        "Could not get description for {} after {} attempts",
        video_id,
        config.max_attempts
    );

    if !session.lock().await.is_current(generation) {
        return;
    }

    // Terminal "no description": still an update, so consumers can render
    // the empty state
    let update = VideoUpdate::new(url, Some(video_id), None, Vec::new());
    if let Err(e) = update_tx.send(update).await {
        ::log::debug!("Failed to send empty update: {}", e);
    }
}
