use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for a field whose selector found nothing on the card.
pub const NOT_AVAILABLE: &str = "N/A";

/// One job listing as extracted from a search-results card.
///
/// Every field is always populated; missing data is the `N/A` sentinel
/// (or an empty string for `skills`), never an absent value. Records are
/// read-only after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub skills: String,
    pub posted_date: String,
    pub link: String,
    pub scraped_at: DateTime<Utc>,
}
