use clap::Parser;
use tubescout::Watch;
use tubescout::results::VideoUpdate;
use tubescout::summary::{self, Summarizer};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting watch for: {}", args.url);

    println!("Note: watching requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    // Build the watch from the config file or from the flags
    let watch = match &args.config {
        Some(path) => match Watch::new(&args.url).with_config_file(path) {
            Ok(watch) => watch,
            Err(e) => {
                ::log::error!("Failed to load config file: {}", e);
                return;
            }
        },
        None => Watch::new(&args.url)
            .with_poll_interval_ms(args.poll_interval)
            .with_max_attempts(args.attempts)
            .with_retry_delay_ms(args.retry_delay)
            .with_min_summary_chars(args.min_summary_chars),
    };

    let min_summary_chars = watch.config().min_summary_chars;
    let model = watch.config().model.clone();
    let api_key = args
        .api_key
        .clone()
        .or_else(|| watch.config().gemini_api_key.clone())
        .or_else(|| std::env::var("GEMINI_API_KEY").ok());
    let summarizer = api_key.map(|key| Summarizer::new(&key, &model));
    if summarizer.is_none() {
        ::log::info!("No API key configured, summaries disabled");
    }

    // Start watching and get a receiver for updates
    let mut rx = match watch.generate().await {
        Ok(rx) => rx,
        Err(e) => {
            ::log::error!("Failed to start watching: {}", e);
            return;
        }
    };

    // Process updates as navigations happen
    while let Some(update) = rx.recv().await {
        process_update(&update, summarizer.as_ref(), min_summary_chars).await;
    }

    ::log::info!("Watch ended");
}

/// Prints one update and requests a summary when one is warranted
async fn process_update(update: &VideoUpdate, summarizer: Option<&Summarizer>, min_chars: usize) {
    let Some(video_id) = &update.video_id else {
        println!("\nNo active video at {}", update.url);
        return;
    };

    println!("\nVideo {} ({})", video_id, update.url);

    if update.links.is_empty() {
        println!("  No affiliate links found");
    } else {
        for (index, link) in update.links.iter().enumerate() {
            println!("  [{}] {}", index + 1, link);
        }
    }

    let Some(description) = &update.description else {
        println!("  No description available");
        return;
    };

    if let Some(summarizer) = summarizer {
        if summary::meets_length_threshold(description, min_chars) {
            match summarizer.summarize(description).await {
                Ok(text) => println!("  Summary: {}", text),
                Err(e) => ::log::error!("Summarization failed for {}: {}", video_id, e),
            }
        } else {
            ::log::info!(
                "Description for {} too short to summarize ({} chars)",
                video_id,
                description.chars().count()
            );
        }
    }
}
