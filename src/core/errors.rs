use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Browser error: {0}")]
    BrowserError(String),

    #[error("Invalid selector `{selector}`: {message}")]
    SelectorError { selector: String, message: String },

    #[error("Classification error: {0}")]
    ClassifyError(String),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
