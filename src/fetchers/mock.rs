use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

use super::Fetcher;
use crate::{ScrapeError, ScrapeResult};

/// One scripted fetch outcome.
#[derive(Debug, Clone)]
pub enum MockPage {
    Html(String),
    Failure(String),
}

/// Replays a fixed sequence of pages, one per `fetch_page` call. Calls
/// past the end of the script return an empty document, which callers
/// treat as "no more results".
#[derive(Clone)]
pub struct MockFetcher {
    pages: Arc<Vec<MockPage>>,
    cursor: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new(pages: Vec<MockPage>) -> Self {
        Self {
            pages: Arc::new(pages),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn requests_served(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_page(&self, _url: &Url) -> ScrapeResult<String> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(index) {
            Some(MockPage::Html(html)) => Ok(html.clone()),
            Some(MockPage::Failure(message)) => Err(ScrapeError::BrowserError(message.clone())),
            None => Ok(String::new()),
        }
    }
}
