mod hirist;

pub use hirist::HiristAdapter;

use url::Url;

use crate::core::{ScrapeResult, SearchQuery};

/// CSS selectors describing how one site lays out its result cards.
///
/// Selectors are kept as strings and compiled where they are used, so an
/// adapter is plain data: supporting a new site means writing a new
/// selector table and URL builder, not touching the pipeline.
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Matches every job card on a results page. May list several card
    /// shapes separated by commas.
    pub cards: String,
    /// Tried in order; the first one with non-empty text wins.
    pub title_candidates: Vec<String>,
    pub company: String,
    /// All matches are collected and joined, not just the first.
    pub locations: String,
    pub experience: String,
    /// All matches are collected and joined.
    pub skills: String,
    pub posted: String,
    pub link: String,
    /// Scanned for a "next page" affordance by label text.
    pub pagination: String,
}

/// Site-specific knowledge: URLs, selector table, pagination labels.
pub trait SiteAdapter: Send + Sync {
    fn name(&self) -> &str;

    /// Scheme + host used to absolutize site-relative links.
    fn origin(&self) -> &str;

    fn search_url(&self, query: &SearchQuery) -> ScrapeResult<Url>;

    /// Page 1 is requested with the bare search URL; this builds the URL
    /// for page 2 onwards.
    fn page_url(&self, base: &Url, page: usize) -> Url;

    /// Element whose presence marks the page as rendered.
    fn ready_selector(&self) -> &str;

    fn selectors(&self) -> &SiteSelectors;

    /// Labels that identify the "next page" control.
    fn next_page_labels(&self) -> &[&str];
}
