// Re-export modules
pub mod config;
pub mod extractor;
pub mod links;
pub mod monitor;
pub mod results;
pub mod session;
pub mod summary;

// Re-export commonly used types for convenience
pub use extractor::extract_description;
pub use links::scan as scan_links;
pub use results::VideoUpdate;

use monitor::source::WebDriverSource;
use tokio::sync::mpsc;

/// Builder for watching a browser session and yielding video updates
pub struct Watch {
    config: config::WatchConfig,
}

impl Watch {
    /// Create a new Watch builder for the given start URL
    pub fn new(start_url: &str) -> Self {
        Self {
            config: config::WatchConfig::new(start_url),
        }
    }

    /// Set how often the session URL is checked for navigation
    pub fn with_poll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.config.poll_interval_ms = interval_ms;
        self
    }

    /// Set the maximum extraction attempts per navigation
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    /// Set the delay between extraction attempts
    pub fn with_retry_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.retry_delay_ms = delay_ms;
        self
    }

    /// Set the minimum description length for summarization
    pub fn with_min_summary_chars(mut self, min_chars: usize) -> Self {
        self.config.min_summary_chars = min_chars;
        self
    }

    /// Set the configuration wholesale
    pub fn with_config(mut self, config: config::WatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = config::WatchConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Current configuration (useful for callers that also summarize)
    pub fn config(&self) -> &config::WatchConfig {
        &self.config
    }

    /// Connect to the browser, open the start URL and begin watching.
    ///
    /// Returns a receiver yielding one VideoUpdate per detected
    /// navigation; dropping it tears the monitor down.
    pub async fn generate(self) -> Result<mpsc::Receiver<VideoUpdate>, Box<dyn std::error::Error>> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        let source = WebDriverSource::connect(&config.webdriver_url)
            .await
            .ok_or("failed to connect to a WebDriver server")?;
        source.goto(&config.start_url).await?;

        Ok(monitor::start(source, &config))
    }
}
