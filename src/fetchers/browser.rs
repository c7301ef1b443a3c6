use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, info, warn};
use std::time::Duration;
use url::Url;

use super::Fetcher;
use crate::{ScrapeError, ScrapeResult};

const DEFAULT_READY_SELECTOR: &str = "body";

/// Renders a page in headless Chrome. One browser session per call: the
/// session is created inside `render` and dropped on every exit path,
/// success or failure.
#[derive(Debug, Clone)]
pub struct BrowserFetcher {
    ready_selector: String,
    ready_timeout: Duration,
    idle_timeout: Duration,
}

impl Default for BrowserFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserFetcher {
    pub fn new() -> Self {
        Self {
            ready_selector: DEFAULT_READY_SELECTOR.to_string(),
            ready_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(30),
        }
    }

    /// Element that must be present before the page counts as loaded.
    pub fn with_ready_selector(mut self, selector: impl Into<String>) -> Self {
        self.ready_selector = selector.into();
        self
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    fn render(&self, url: &Url) -> ScrapeResult<String> {
        let options = LaunchOptions {
            headless: true,
            sandbox: false,
            idle_browser_timeout: self.idle_timeout,
            ..Default::default()
        };

        let browser =
            Browser::new(options).map_err(|e| ScrapeError::BrowserError(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;

        tab.navigate_to(url.as_str())
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;
        tab.wait_for_element_with_custom_timeout(&self.ready_selector, self.ready_timeout)
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;

        tab.get_content()
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))
    }
}

#[async_trait]
impl Fetcher for BrowserFetcher {
    async fn fetch_page(&self, url: &Url) -> ScrapeResult<String> {
        info!("Rendering page: {}", url);
        match self.render(url) {
            Ok(html) => {
                debug!("Rendered {} ({} bytes)", url, html.len());
                Ok(html)
            }
            Err(e) => {
                warn!("Failed to render {}: {}", url, e);
                Ok(String::new())
            }
        }
    }
}
