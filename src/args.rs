use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tubescout")]
#[command(about = "Watches a YouTube session, extracting descriptions and affiliate links")]
#[command(version)]
pub struct Args {
    /// Watch page URL to open in the browser session
    pub url: String,

    /// Optional JSON configuration file (overrides the flags below)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How often to check the session URL for navigation, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub poll_interval: u64,

    /// Maximum extraction attempts per navigation
    #[arg(short, long, default_value_t = 5)]
    pub attempts: u32,

    /// Delay between extraction attempts, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub retry_delay: u64,

    /// Minimum description length before a summary is requested
    #[arg(long, default_value_t = 100)]
    pub min_summary_chars: usize,

    /// Gemini API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,
}
