use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a watched browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// URL to open in the browser session before watching begins
    pub start_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// How often to compare the session's current URL against the last
    /// observed one, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum extraction attempts per navigation before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between extraction attempts, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Minimum description length (in characters) before a summary is requested
    #[serde(default = "default_min_summary_chars")]
    pub min_summary_chars: usize,

    /// API key for the summarization service; summaries are skipped without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// Model name used for summarization requests
    #[serde(default = "default_model")]
    pub model: String,
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for poll_interval_ms
fn default_poll_interval_ms() -> u64 {
    500
}

/// Default value for max_attempts
fn default_max_attempts() -> u32 {
    5
}

/// Default value for retry_delay_ms
fn default_retry_delay_ms() -> u64 {
    1000
}

/// Default value for min_summary_chars
fn default_min_summary_chars() -> usize {
    100
}

/// Default summarization model
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl WatchConfig {
    /// Create a new configuration with default values
    pub fn new(start_url: &str) -> Self {
        Self {
            start_url: start_url.to_string(),
            webdriver_url: default_webdriver_url(),
            poll_interval_ms: default_poll_interval_ms(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            min_summary_chars: default_min_summary_chars(),
            gemini_api_key: None,
            model: default_model(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
