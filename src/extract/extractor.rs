use chrono::Utc;
use log::{debug, warn};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;

use super::record::{JobRecord, NOT_AVAILABLE};
use super::sites::{SiteAdapter, SiteSelectors};
use crate::core::{ScrapeError, ScrapeResult};
use crate::stats::ScrapeStats;

/// Turns one results-page document into job records, card by card, in
/// document order.
///
/// Fields are resolved independently: a selector that finds nothing on a
/// card yields that field's sentinel and leaves the rest of the card
/// untouched. A card where none of title, company or link resolve is
/// logged and skipped without affecting its neighbors.
pub struct JobExtractor {
    adapter: Arc<dyn SiteAdapter>,
    stats: Arc<ScrapeStats>,
    posted_prefix: Regex,
}

struct CardSelectors {
    cards: Selector,
    title_candidates: Vec<Selector>,
    company: Selector,
    locations: Selector,
    experience: Selector,
    skills: Selector,
    posted: Selector,
    link: Selector,
}

impl JobExtractor {
    /// Fails fast if the adapter's selector table does not compile.
    pub fn new(adapter: Arc<dyn SiteAdapter>, stats: Arc<ScrapeStats>) -> ScrapeResult<Self> {
        compile(adapter.selectors())?;
        Ok(Self {
            adapter,
            stats,
            posted_prefix: Regex::new(r"(?i)^posted:?\s*").unwrap(),
        })
    }

    pub fn extract(&self, html: &str) -> Vec<JobRecord> {
        let selectors = match compile(self.adapter.selectors()) {
            Ok(selectors) => selectors,
            Err(e) => {
                warn!("Selector table rejected, extracting nothing: {}", e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for card in document.select(&selectors.cards) {
            match self.extract_card(card, &selectors) {
                Some(record) => {
                    self.stats.record_card();
                    records.push(record);
                }
                None => self.stats.record_card_skipped(),
            }
        }

        debug!("Extracted {} records from document", records.len());
        records
    }

    fn extract_card(&self, card: ElementRef, selectors: &CardSelectors) -> Option<JobRecord> {
        let title = selectors
            .title_candidates
            .iter()
            .find_map(|candidate| first_text(card, candidate))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let company =
            first_text(card, &selectors.company).unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let locations = all_texts(card, &selectors.locations);
        let location = if locations.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            locations.join(", ")
        };

        let experience =
            first_text(card, &selectors.experience).unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let skills = all_texts(card, &selectors.skills).join(", ");

        let posted_date = first_text(card, &selectors.posted)
            .map(|text| self.strip_posted_prefix(&text))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let link = self.extract_link(card, &selectors.link);

        if title == NOT_AVAILABLE && company == NOT_AVAILABLE && link == NOT_AVAILABLE {
            warn!("Skipping card with no recognizable fields");
            return None;
        }

        Some(JobRecord {
            title,
            company,
            location,
            experience,
            skills,
            posted_date,
            link,
            scraped_at: Utc::now(),
        })
    }

    fn strip_posted_prefix(&self, text: &str) -> String {
        self.posted_prefix.replace(text, "").trim().to_string()
    }

    fn extract_link(&self, card: ElementRef, link: &Selector) -> String {
        match card.select(link).next().and_then(|a| a.value().attr("href")) {
            Some(href) if href.starts_with('/') => {
                format!("{}{}", self.adapter.origin().trim_end_matches('/'), href)
            }
            Some(href) => href.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

fn compile(table: &SiteSelectors) -> ScrapeResult<CardSelectors> {
    Ok(CardSelectors {
        cards: parse_selector(&table.cards)?,
        title_candidates: table
            .title_candidates
            .iter()
            .map(|raw| parse_selector(raw))
            .collect::<ScrapeResult<Vec<_>>>()?,
        company: parse_selector(&table.company)?,
        locations: parse_selector(&table.locations)?,
        experience: parse_selector(&table.experience)?,
        skills: parse_selector(&table.skills)?,
        posted: parse_selector(&table.posted)?,
        link: parse_selector(&table.link)?,
    })
}

fn parse_selector(raw: &str) -> ScrapeResult<Selector> {
    Selector::parse(raw).map_err(|e| ScrapeError::SelectorError {
        selector: raw.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .map(|element| element_text(&element))
        .find(|text| !text.is_empty())
}

fn all_texts(card: ElementRef, selector: &Selector) -> Vec<String> {
    card.select(selector)
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::sites::HiristAdapter;

    fn extractor() -> JobExtractor {
        JobExtractor::new(
            Arc::new(HiristAdapter::new()),
            Arc::new(ScrapeStats::new()),
        )
        .unwrap()
    }

    const THREE_CARD_PAGE: &str = r#"
        <html><body><main>
          <div class="job-card">
            <h2>Senior Python Developer</h2>
            <div class="company-name">Acme Corp</div>
            <span class="location">Bangalore</span>
            <span class="location">Remote</span>
            <span class="experience">5-8 yrs</span>
            <span class="skill-tag">Python</span>
            <span class="skill-tag">Django</span>
            <span class="posted">Posted 2 hours ago</span>
            <a href="/j/senior-python-developer-1001">View</a>
          </div>
          <li role="listitem">
            <a href="https://www.hirist.tech/j/data-engineer-1002"><b>Data Engineer</b></a>
            <div class="company-name">Beta Labs</div>
            <span class="location">Pune</span>
            <span class="experience">3-5 yrs</span>
            <span class="skill-tag">Spark</span>
            <span class="posted">1 day ago</span>
          </li>
          <div class="job-card">
            <h3>Backend Engineer</h3>
            <div class="company-name">Gamma Tech</div>
            <span class="posted">Posted today</span>
            <a href="/j/backend-engineer-1003">View</a>
          </div>
        </main></body></html>"#;

    #[test]
    fn empty_document_yields_empty_sequence() {
        let records = extractor().extract("<html><body><p>nothing here</p></body></html>");
        assert!(records.is_empty());
    }

    #[test]
    fn extracts_all_cards_in_document_order() {
        let records = extractor().extract(THREE_CARD_PAGE);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Senior Python Developer");
        assert_eq!(records[1].title, "Data Engineer");
        assert_eq!(records[2].title, "Backend Engineer");
    }

    #[test]
    fn missing_fields_fall_back_to_sentinels_without_affecting_others() {
        let records = extractor().extract(THREE_CARD_PAGE);
        let incomplete = &records[2];

        assert_eq!(incomplete.location, NOT_AVAILABLE);
        assert_eq!(incomplete.skills, "");
        assert_eq!(incomplete.experience, NOT_AVAILABLE);
        // Fields that are present on the same card are unaffected.
        assert_eq!(incomplete.company, "Gamma Tech");
        assert_eq!(incomplete.posted_date, "today");
    }

    #[test]
    fn joins_every_location_fragment() {
        let records = extractor().extract(THREE_CARD_PAGE);
        assert_eq!(records[0].location, "Bangalore, Remote");
    }

    #[test]
    fn joins_skill_tags() {
        let records = extractor().extract(THREE_CARD_PAGE);
        assert_eq!(records[0].skills, "Python, Django");
    }

    #[test]
    fn strips_posted_label_prefix() {
        let records = extractor().extract(THREE_CARD_PAGE);
        assert_eq!(records[0].posted_date, "2 hours ago");
        // No prefix to strip on the second card.
        assert_eq!(records[1].posted_date, "1 day ago");
    }

    #[test]
    fn absolutizes_site_relative_links_and_passes_absolute_through() {
        let records = extractor().extract(THREE_CARD_PAGE);
        assert_eq!(
            records[0].link,
            "https://www.hirist.tech/j/senior-python-developer-1001"
        );
        assert_eq!(
            records[1].link,
            "https://www.hirist.tech/j/data-engineer-1002"
        );
    }

    #[test]
    fn title_falls_back_from_heading_to_class_to_bold_link_text() {
        let html = r#"
            <div class="job-card">
              <div class="job-title">DevOps Engineer</div>
              <a href="/j/1">View</a>
            </div>
            <li role="listitem">
              <a href="/j/2"><strong>SRE</strong></a>
            </li>"#;

        let records = extractor().extract(html);
        assert_eq!(records[0].title, "DevOps Engineer");
        assert_eq!(records[1].title, "SRE");
    }

    #[test]
    fn card_with_no_recognizable_fields_is_skipped() {
        let html = r#"
            <div class="job-card"><span class="filler">ad slot</span></div>
            <div class="job-card">
              <h2>Platform Engineer</h2>
              <div class="company-name">Delta Inc</div>
              <a href="/j/platform-engineer-1">View</a>
            </div>"#;

        let records = extractor().extract(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Platform Engineer");
    }

    #[test]
    fn skipped_and_extracted_cards_are_counted() {
        let stats = Arc::new(ScrapeStats::new());
        let extractor =
            JobExtractor::new(Arc::new(HiristAdapter::new()), Arc::clone(&stats)).unwrap();

        let html = r#"
            <div class="job-card"><span class="filler">ad slot</span></div>
            <div class="job-card"><h2>Platform Engineer</h2><a href="/j/1">View</a></div>"#;
        extractor.extract(html);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.cards_extracted, 1);
        assert_eq!(snapshot.cards_skipped, 1);
    }

    #[test]
    fn whitespace_in_card_text_is_collapsed() {
        let html = r#"
            <div class="job-card">
              <h2>
                Senior
                Rust   Developer
              </h2>
              <a href="/j/1">View</a>
            </div>"#;

        let records = extractor().extract(html);
        assert_eq!(records[0].title, "Senior Rust Developer");
    }
}
