use std::env;
use std::sync::Arc;
use std::time::Duration;

use jobspider::extract::sites::{HiristAdapter, SiteAdapter};
use jobspider::fetchers::BrowserFetcher;
use jobspider::filters;
use jobspider::{CrawlConfig, CsvExporter, JobSearch, RecencyWindow, ScrapeResult, SearchQuery};

#[tokio::main]
async fn main() -> ScrapeResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    // First argument is the search keyword, the rest narrow the results.
    let mut args = env::args().skip(1);
    let keyword = args
        .next()
        .unwrap_or_else(|| "software engineer".to_string());
    let filter_keywords: Vec<String> = args.collect();

    let recency = env::var("JOBSPIDER_RECENCY")
        .map(|label| RecencyWindow::from_label(&label))
        .unwrap_or(RecencyWindow::All);
    let out_dir = env::var("JOBSPIDER_OUT").unwrap_or_else(|_| "exports".to_string());
    let max_pages = env::var("JOBSPIDER_PAGES")
        .ok()
        .and_then(|pages| pages.parse().ok())
        .unwrap_or(10);

    let adapter = Arc::new(HiristAdapter::new());
    let fetcher = BrowserFetcher::new()
        .with_ready_selector(adapter.ready_selector())
        .with_ready_timeout(Duration::from_secs(10));
    let config = CrawlConfig::default()
        .with_max_pages(max_pages)
        .with_page_delay(Duration::from_secs(2));

    let search = JobSearch::new(adapter, Box::new(fetcher), config)?;
    let query = SearchQuery::new(keyword.clone());

    let records = search.run(&query).await?;
    let records = filters::by_recency(records, recency);
    let records = filters::by_keywords(records, &filter_keywords);

    if records.is_empty() {
        println!("No jobs matching your criteria were found.");
    } else {
        let exporter = CsvExporter::new(&out_dir)?;
        let path = exporter.export(&records, search.site(), &keyword)?;
        println!("{} jobs exported to {}", records.len(), path.display());
    }

    search.stats().print_summary();
    Ok(())
}
