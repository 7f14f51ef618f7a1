use crate::error::Result;
use crate::models::ListingRecord;
use async_trait::async_trait;

/// Raw response for one requested URL
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetch-by-URL capability the crawl runs on.
/// Retries and timeouts are the implementation's business; the crawler
/// calls each URL exactly once and only interprets the status.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

/// Receives per-listing diagnostics while the crawl runs
pub trait ListingObserver: Send + Sync {
    /// A listing passed the filter (or could not be classified)
    fn good_listing(&self, url: &str, record: &ListingRecord);

    /// A listing matched at least one banned term
    fn bad_listing(&self, url: &str, matched: &[String]);

    /// Classification was skipped and the listing defaulted to good
    fn inconclusive(&self, _url: &str, _reason: &str) {}
}
