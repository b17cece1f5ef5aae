use fantoccini::{Client, ClientBuilder};
use std::future::Future;

/// A live page the monitor can observe.
///
/// The two methods are the only window into the browser the pipeline
/// needs: where the session currently is, and a serialized snapshot of its
/// DOM. Both return `None` on transport trouble; the monitor treats that
/// as "nothing to see this round" rather than an error.
pub trait PageSource: Send + Sync {
    /// Current location of the session
    fn current_url(&self) -> impl Future<Output = Option<String>> + Send;

    /// Full serialized DOM of the current page
    fn page_html(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Page source backed by a WebDriver-controlled browser
pub struct WebDriverSource {
    client: Client,
}

impl WebDriverSource {
    /// Connects to the WebDriver instance
    pub async fn connect(webdriver_url: &str) -> Option<Self> {
        // Try the configured WebDriver URL first
        match ClientBuilder::native().connect(webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                return Some(Self { client });
            }
            Err(e) => {
                ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            }
        }

        // If we couldn't connect, try with common alternative URLs
        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4723", // Appium default
            "http://localhost:9222", // Chrome debug port default
            "http://127.0.0.1:4444", // Try with IP instead of localhost
        ];

        for url in fallback_urls.iter() {
            if *url == webdriver_url {
                continue; // Skip if it's the same as the one we already tried
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = ClientBuilder::native().connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Some(Self { client });
            }
        }

        ::log::error!("Failed to connect to any WebDriver servers");
        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        None
    }

    /// Navigates the session to the given URL
    pub async fn goto(&self, url: &str) -> Result<(), fantoccini::error::CmdError> {
        self.client.goto(url).await
    }

    /// Closes the underlying browser session
    pub async fn close(self) -> Result<(), fantoccini::error::CmdError> {
        self.client.close().await
    }
}

impl PageSource for WebDriverSource {
    fn current_url(&self) -> impl Future<Output = Option<String>> + Send {
        async move {
            match self.client.current_url().await {
                Ok(url) => Some(url.to_string()),
                Err(e) => {
                    ::log::warn!("Failed to read current URL: {}", e);
                    None
                }
            }
        }
    }

    fn page_html(&self) -> impl Future<Output = Option<String>> + Send {
        async move {
            match self.client.source().await {
                Ok(html) => Some(html),
                Err(e) => {
                    ::log::warn!("Failed to get page source: {}", e);
                    None
                }
            }
        }
    }
}
