use crate::ScrapeResult;
use async_trait::async_trait;
use url::Url;

/// Loads one search-results page and returns its rendered HTML.
///
/// Implementations backed by a real browser or HTTP client recover from
/// navigation and timeout failures locally: they log the failure and
/// return an empty document instead of an error. An `Err` from a fetcher
/// is reserved for genuinely unexpected conditions and makes the caller
/// stop with whatever it has accumulated so far.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> ScrapeResult<String>;
}
