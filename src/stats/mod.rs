use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub pages_fetched: usize,
    pub pages_empty: usize,
    pub bytes_downloaded: usize,
    pub cards_extracted: usize,
    pub cards_skipped: usize,
}

/// Shared run counters, updated by the paginator and the extractor.
#[derive(Debug, Clone)]
pub struct ScrapeStats {
    inner: Arc<RwLock<CrawlStats>>,
}

impl ScrapeStats {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CrawlStats {
                start_time: Utc::now(),
                end_time: None,
                pages_fetched: 0,
                pages_empty: 0,
                bytes_downloaded: 0,
                cards_extracted: 0,
                cards_skipped: 0,
            })),
        }
    }

    pub fn record_page(&self, bytes: usize) {
        let mut stats = self.inner.write();
        stats.pages_fetched += 1;
        stats.bytes_downloaded += bytes;
    }

    pub fn record_empty_page(&self) {
        self.inner.write().pages_empty += 1;
    }

    pub fn record_card(&self) {
        self.inner.write().cards_extracted += 1;
    }

    pub fn record_card_skipped(&self) {
        self.inner.write().cards_skipped += 1;
    }

    pub fn finish(&self) {
        self.inner.write().end_time = Some(Utc::now());
    }

    pub fn snapshot(&self) -> CrawlStats {
        self.inner.read().clone()
    }

    pub fn print_summary(&self) {
        let stats = self.inner.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);

        println!("\nScraping Statistics:");
        println!("===================");
        println!("Duration: {} seconds", duration.num_seconds());
        println!("Pages Fetched: {}", stats.pages_fetched);
        println!("Empty Pages: {}", stats.pages_empty);
        println!(
            "Data Downloaded: {:.2} MB",
            stats.bytes_downloaded as f64 / 1_000_000.0
        );
        println!("Cards Extracted: {}", stats.cards_extracted);
        println!("Cards Skipped: {}", stats.cards_skipped);
    }
}

impl Default for ScrapeStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = ScrapeStats::new();
        stats.record_page(1024);
        stats.record_page(2048);
        stats.record_empty_page();
        stats.record_card();
        stats.record_card_skipped();
        stats.finish();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.pages_fetched, 2);
        assert_eq!(snapshot.pages_empty, 1);
        assert_eq!(snapshot.bytes_downloaded, 3072);
        assert_eq!(snapshot.cards_extracted, 1);
        assert_eq!(snapshot.cards_skipped, 1);
        assert!(snapshot.end_time.is_some());
    }
}
