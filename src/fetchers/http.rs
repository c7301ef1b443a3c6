use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, ClientBuilder};
use url::Url;

use super::Fetcher;
use crate::ScrapeResult;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Plain HTTP fetcher for server-rendered listing pages. No JavaScript
/// execution; use [`super::BrowserFetcher`] for sites that build their
/// result list client-side.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> ScrapeResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &Url) -> ScrapeResult<String> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> ScrapeResult<String> {
        match self.get(url).await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                Ok(String::new())
            }
        }
    }
}
