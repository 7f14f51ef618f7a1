use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Fetching {url} returned status {status}")]
    Fetch { url: String, status: u16 },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Seen-set cache at {path} is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Listing {url} is missing its {field}")]
    Extraction { url: String, field: &'static str },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScoutError {
    /// Errors that only concern a single listing page and may be skipped
    /// under [`ListingFailurePolicy::Skip`](crate::scrapers::ListingFailurePolicy).
    pub fn is_listing_local(&self) -> bool {
        matches!(
            self,
            ScoutError::Fetch { .. } | ScoutError::Transport(_) | ScoutError::Extraction { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
