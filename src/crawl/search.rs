use log::info;
use std::sync::Arc;

use super::Paginator;
use crate::core::{CrawlConfig, ScrapeResult, SearchQuery};
use crate::extract::sites::SiteAdapter;
use crate::extract::{JobExtractor, JobRecord};
use crate::fetchers::Fetcher;
use crate::stats::ScrapeStats;

/// Wires one site adapter, one fetcher, the paginator and the extractor
/// into a runnable search.
pub struct JobSearch {
    adapter: Arc<dyn SiteAdapter>,
    paginator: Paginator,
    extractor: JobExtractor,
    stats: Arc<ScrapeStats>,
}

impl JobSearch {
    pub fn new(
        adapter: Arc<dyn SiteAdapter>,
        fetcher: Box<dyn Fetcher>,
        config: CrawlConfig,
    ) -> ScrapeResult<Self> {
        let stats = Arc::new(ScrapeStats::new());
        let extractor = JobExtractor::new(Arc::clone(&adapter), Arc::clone(&stats))?;
        let paginator = Paginator::new(
            Arc::clone(&adapter),
            fetcher,
            config,
            Arc::clone(&stats),
        );

        Ok(Self {
            adapter,
            paginator,
            extractor,
            stats,
        })
    }

    /// Crawls every result page for the query and extracts records in
    /// page order. Filtering is left to the caller.
    pub async fn run(&self, query: &SearchQuery) -> ScrapeResult<Vec<JobRecord>> {
        let base = self.adapter.search_url(query)?;
        info!(
            "Searching {} for \"{}\"",
            self.adapter.name(),
            query.keyword
        );

        let pages = self.paginator.collect_pages(&base).await;
        let mut records = Vec::new();
        for page in &pages {
            records.extend(self.extractor.extract(page));
        }

        self.stats.finish();
        info!(
            "Extracted {} records from {} pages",
            records.len(),
            pages.len()
        );
        Ok(records)
    }

    pub fn site(&self) -> &str {
        self.adapter.name()
    }

    pub fn stats(&self) -> &ScrapeStats {
        &self.stats
    }
}
