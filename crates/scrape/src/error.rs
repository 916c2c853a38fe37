// ABOUTME: Error types for page parsing, crawling, and CSV table reading.
// ABOUTME: Wraps URL, HTTP, extraction, and CSV failures with the URL or row they came from.

use artscrape_extract::ExtractError;
use thiserror::Error;

/// Errors raised while fetching or reading scraped input.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A start URL or discovered link could not be parsed.
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be built from the crawl options.
    #[error("http client: {0}")]
    Client(#[source] reqwest::Error),

    /// The HTTP request failed or returned an error status.
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A fetched page did not yield the fields the pipeline needs.
    #[error("extract {url}: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },

    /// A CSV row's dimension string could not be parsed.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ExtractError,
    },

    /// The CSV input was malformed.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV input had no header columns.
    #[error("csv input has no columns")]
    EmptyTable,
}

impl ScrapeError {
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        ScrapeError::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        ScrapeError::Fetch {
            url: url.into(),
            source,
        }
    }

    pub fn extract(url: impl Into<String>, source: ExtractError) -> Self {
        ScrapeError::Extract {
            url: url.into(),
            source,
        }
    }
}
