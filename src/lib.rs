pub mod classify;
pub mod core;
pub mod crawl;
pub mod export;
pub mod extract;
pub mod fetchers;
pub mod filters;
pub mod stats;

pub use crate::core::{CrawlConfig, ScrapeError, ScrapeResult, SearchQuery};
pub use crate::crawl::{JobSearch, Paginator};
pub use crate::export::CsvExporter;
pub use crate::extract::{JobExtractor, JobRecord};
pub use crate::fetchers::Fetcher;
pub use crate::filters::RecencyWindow;
pub use crate::stats::ScrapeStats;
