use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::core::{ScrapeError, ScrapeResult};
use crate::extract::JobRecord;

const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama2";

/// Yes/no relevance judge backed by a local Ollama model. Optional
/// collaborator: the pipeline never depends on it, callers apply it as an
/// extra filter over already-extracted records.
pub struct OllamaClassifier {
    http: Client,
    endpoint: String,
    model: String,
}

impl Default for OllamaClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaClassifier {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Asks the model whether `record` matches `criterion`. The reply
    /// counts as a match when it contains "yes", case-insensitively.
    pub async fn classify(&self, record: &JobRecord, criterion: &str) -> ScrapeResult<bool> {
        let url = format!("{}/api/generate", self.endpoint.trim_end_matches('/'));
        let prompt = build_prompt(record, criterion);

        let response = self
            .http
            .post(&url)
            .json(&json!({ "model": self.model, "prompt": prompt, "stream": false }))
            .send()
            .await?;
        let body: Value = response.json().await?;

        let answer = body
            .get("response")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ScrapeError::ClassifyError("model reply missing `response` field".to_string())
            })?;

        debug!("Classifier answered: {}", answer.trim());
        Ok(answer.trim().to_lowercase().contains("yes"))
    }
}

fn build_prompt(record: &JobRecord, criterion: &str) -> String {
    format!(
        "You are reviewing scraped job listings. Here is the job data:\n\n\
         Title: {}\nCompany: {}\nLocation: {}\nExperience: {}\nSkills: {}\nPosted: {}\n\n\
         Please determine if this job matches the following criteria: {}\n\n\
         Answer with ONLY 'yes' or 'no'. No explanation needed.",
        record.title,
        record.company,
        record.location,
        record.experience,
        record.skills,
        record.posted_date,
        criterion
    )
}
