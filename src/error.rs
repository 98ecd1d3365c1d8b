// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure (DNS, TLS, connection, body read)
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The HTTP client itself could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("missing {what} in {context}")]
    MissingElement { what: &'static str, context: String },

    #[error("{url}: row has {found} values, header has {expected}")]
    ColumnMismatch { url: String, expected: usize, found: usize },

    #[error("no job postings found")]
    NoPostings,

    /// Table build stopped at job `failed_at` (0-based)
    #[error("table build stopped at job {failed_at} ({url}): {cause}")]
    Partial {
        failed_at: usize,
        url: String,
        #[source]
        cause: Box<ScrapeError>,
    },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
