use log::{debug, info, warn};
use scraper::{Html, Selector};
use std::sync::Arc;
use tokio::time::sleep;
use url::Url;

use crate::core::{CrawlConfig, ScrapeResult};
use crate::extract::sites::SiteAdapter;
use crate::fetchers::Fetcher;
use crate::stats::ScrapeStats;

/// Bounded linear crawl over a site's result pages.
///
/// Page 1 is requested with the bare search URL, later pages with the
/// adapter's `page` parameter appended. The walk ends when a page carries
/// no job cards, no "next" affordance is present, the page cap is hit, or
/// the fetcher fails; a failure mid-crawl keeps the pages collected so
/// far.
pub struct Paginator {
    adapter: Arc<dyn SiteAdapter>,
    fetcher: Box<dyn Fetcher>,
    config: CrawlConfig,
    stats: Arc<ScrapeStats>,
}

impl Paginator {
    pub fn new(
        adapter: Arc<dyn SiteAdapter>,
        fetcher: Box<dyn Fetcher>,
        config: CrawlConfig,
        stats: Arc<ScrapeStats>,
    ) -> Self {
        Self {
            adapter,
            fetcher,
            config,
            stats,
        }
    }

    /// All collected pages joined into one document stream.
    pub async fn collect_html(&self, base: &Url) -> String {
        self.collect_pages(base).await.concat()
    }

    /// Walks result pages in order, one HTML string per page.
    pub async fn collect_pages(&self, base: &Url) -> Vec<String> {
        let mut pages = Vec::new();
        let mut page = 1;

        while page <= self.config.max_pages {
            let url = if page == 1 {
                base.clone()
            } else {
                self.adapter.page_url(base, page)
            };

            let html = match self.fetch_listing_page(&url).await {
                Ok(Some(html)) => html,
                Ok(None) => {
                    // Either the last page, or a load failure that looks
                    // like one; `empty_page_retries` is the knob for
                    // telling the two apart.
                    self.stats.record_empty_page();
                    debug!("No job cards on page {}, stopping", page);
                    break;
                }
                Err(e) => {
                    warn!("Pagination aborted on page {}: {}", page, e);
                    break;
                }
            };

            self.stats.record_page(html.len());
            let has_next = self.has_next_control(&html);
            pages.push(html);

            if !has_next {
                debug!("No next-page control on page {}, stopping", page);
                break;
            }

            page += 1;
            sleep(self.config.page_delay).await;
        }

        info!("Collected {} result pages", pages.len());
        pages
    }

    /// Fetches one page, re-fetching up to `empty_page_retries` times if
    /// it comes back without job cards. `Ok(None)` means the page stayed
    /// empty through every attempt.
    async fn fetch_listing_page(&self, url: &Url) -> ScrapeResult<Option<String>> {
        let mut attempt = 0;
        loop {
            let html = self.fetcher.fetch_page(url).await?;
            if self.has_listing_cards(&html) {
                return Ok(Some(html));
            }
            if attempt >= self.config.empty_page_retries {
                return Ok(None);
            }
            attempt += 1;
            debug!(
                "Empty page at {}, retry {}/{}",
                url, attempt, self.config.empty_page_retries
            );
            sleep(self.config.page_delay).await;
        }
    }

    fn has_listing_cards(&self, html: &str) -> bool {
        if html.is_empty() {
            return false;
        }
        let Ok(cards) = Selector::parse(&self.adapter.selectors().cards) else {
            return false;
        };
        Html::parse_document(html).select(&cards).next().is_some()
    }

    fn has_next_control(&self, html: &str) -> bool {
        let Ok(pagination) = Selector::parse(&self.adapter.selectors().pagination) else {
            return false;
        };
        let document = Html::parse_document(html);
        document.select(&pagination).any(|control| {
            let label = control.text().collect::<String>();
            let label = label.trim();
            self.adapter
                .next_page_labels()
                .iter()
                .any(|next| label.contains(next))
        })
    }
}
