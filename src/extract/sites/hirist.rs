use url::Url;

use super::{SiteAdapter, SiteSelectors};
use crate::core::{ScrapeResult, SearchQuery};

const ORIGIN: &str = "https://www.hirist.tech";
const SEARCH_ENDPOINT: &str = "https://www.hirist.tech/search";

/// Selector table for hirist.tech search results. The feed renders two
/// card shapes: the classic `div.job-card` and a list-item role used by
/// the newer layout.
pub struct HiristAdapter {
    selectors: SiteSelectors,
}

impl Default for HiristAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HiristAdapter {
    pub fn new() -> Self {
        Self {
            selectors: SiteSelectors {
                cards: r#"div.job-card, li[role="listitem"]"#.to_string(),
                title_candidates: vec![
                    "h2, h3".to_string(),
                    ".job-title, .jobTitle".to_string(),
                    "a b, a strong".to_string(),
                ],
                company: ".company-name, .comp-name".to_string(),
                locations: "span.location, .loc".to_string(),
                experience: "span.experience, .exp".to_string(),
                skills: ".skill-tag, .tag".to_string(),
                posted: ".posted-date, span.posted".to_string(),
                link: "a[href]".to_string(),
                pagination: ".pagination a, .pagination button, a.next".to_string(),
            },
        }
    }
}

impl SiteAdapter for HiristAdapter {
    fn name(&self) -> &str {
        "hirist"
    }

    fn origin(&self) -> &str {
        ORIGIN
    }

    fn search_url(&self, query: &SearchQuery) -> ScrapeResult<Url> {
        let mut url = Url::parse(SEARCH_ENDPOINT)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", &query.keyword);
            if let Some(location) = query.location_id {
                pairs.append_pair("loc", &location.to_string());
            }
            if let Some(years) = query.experience_years {
                pairs.append_pair("exp", &years.to_string());
            }
            if query.include_range {
                pairs.append_pair("range", "1");
            }
        }
        Ok(url)
    }

    fn page_url(&self, base: &Url, page: usize) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }

    fn ready_selector(&self) -> &str {
        "main"
    }

    fn selectors(&self) -> &SiteSelectors {
        &self.selectors
    }

    fn next_page_labels(&self) -> &[&str] {
        &["›", "Next"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_carries_query_parameters() {
        let adapter = HiristAdapter::new();
        let query = SearchQuery::new("python developer")
            .with_location_id(17)
            .with_experience_years(3)
            .with_range(true);

        let url = adapter.search_url(&query).unwrap();
        let query_string = url.query().unwrap();

        assert!(url.as_str().starts_with(SEARCH_ENDPOINT));
        assert!(query_string.contains("query=python+developer"));
        assert!(query_string.contains("loc=17"));
        assert!(query_string.contains("exp=3"));
        assert!(query_string.contains("range=1"));
    }

    #[test]
    fn search_url_omits_unset_refinements() {
        let adapter = HiristAdapter::new();
        let url = adapter.search_url(&SearchQuery::new("rust")).unwrap();

        assert_eq!(url.query().unwrap(), "query=rust");
    }

    #[test]
    fn page_url_appends_page_parameter() {
        let adapter = HiristAdapter::new();
        let base = adapter.search_url(&SearchQuery::new("rust")).unwrap();

        let page2 = adapter.page_url(&base, 2);
        assert!(page2.query().unwrap().ends_with("page=2"));

        // The base URL used for page 1 is untouched.
        assert!(!base.query().unwrap().contains("page="));
    }
}
