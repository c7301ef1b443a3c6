use std::collections::HashSet;

use crate::extract::{JobRecord, NOT_AVAILABLE};

/// Time-window bucket applied to the free-text posted-date field.
///
/// Matching is substring-based and case-insensitive, mirroring what the
/// site prints ("2 hours ago", "Posted today", "1 day ago"); the text is
/// never parsed into a real duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecencyWindow {
    LastDay,
    Last3Days,
    All,
}

impl RecencyWindow {
    /// Maps the UI's filter labels onto a window; anything unrecognized
    /// means no recency bound.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Last 24 hours" => Self::LastDay,
            "Last 3 days" => Self::Last3Days,
            _ => Self::All,
        }
    }

    pub fn matches(&self, posted_date: &str) -> bool {
        let text = posted_date.to_lowercase();
        let within_day = text.contains("hour") || text.contains("today");
        match self {
            Self::All => true,
            Self::LastDay => within_day,
            Self::Last3Days => within_day || text.contains("1 day") || text.contains("2 day"),
        }
    }
}

pub fn by_recency(records: Vec<JobRecord>, window: RecencyWindow) -> Vec<JobRecord> {
    records
        .into_iter()
        .filter(|record| window.matches(&record.posted_date))
        .collect()
}

/// Keeps records where ANY keyword appears, case-insensitively, in the
/// title or skills text. An empty keyword list keeps everything.
pub fn by_keywords(records: Vec<JobRecord>, keywords: &[String]) -> Vec<JobRecord> {
    if keywords.is_empty() {
        return records;
    }
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    records
        .into_iter()
        .filter(|record| {
            let haystack = format!("{} {}", record.title, record.skills).to_lowercase();
            needles.iter().any(|needle| haystack.contains(needle))
        })
        .collect()
}

/// Optional uniqueness pass for downstream consumers that need
/// determinism: keeps the first record for each link. Records whose link
/// never resolved are kept as-is.
pub fn dedup_by_link(records: Vec<JobRecord>) -> Vec<JobRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| record.link == NOT_AVAILABLE || seen.insert(record.link.clone()))
        .collect()
}
