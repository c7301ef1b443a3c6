use std::time::Duration;

/// One search against a job site: the free-text keyword plus the optional
/// query refinements the site understands.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub location_id: Option<u32>,
    pub experience_years: Option<u32>,
    pub include_range: bool,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location_id: None,
            experience_years: None,
            include_range: false,
        }
    }

    pub fn with_location_id(mut self, id: u32) -> Self {
        self.location_id = Some(id);
        self
    }

    pub fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = Some(years);
        self
    }

    pub fn with_range(mut self, include: bool) -> Self {
        self.include_range = include;
        self
    }
}

/// Knobs for the pagination loop.
///
/// `empty_page_retries` re-fetches a page that came back without job cards
/// before concluding the last page was reached; 0 ends the crawl at the
/// first empty page.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub max_pages: usize,
    pub page_delay: Duration,
    pub ready_timeout: Duration,
    pub empty_page_retries: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: 25,
            page_delay: Duration::from_secs(2),
            ready_timeout: Duration::from_secs(10),
            empty_page_retries: 0,
        }
    }
}

impl CrawlConfig {
    pub fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    pub fn with_empty_page_retries(mut self, retries: usize) -> Self {
        self.empty_page_retries = retries;
        self
    }
}
