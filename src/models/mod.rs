use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical absolute URL of a listing, used as the cache key
pub type ListingIdentity = String;

/// `true` when a listing is worth looking at, `false` when a banned term matched
pub type Verdict = bool;

/// Every listing ever classified, keyed by identity.
/// Insertion ordered so that reports follow crawl discovery order.
pub type SeenSet = IndexMap<ListingIdentity, Verdict>;

/// Fields extracted from a single listing page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub title: String,
    /// Price text with currency suffix and thousands separators stripped
    pub price: String,
    /// Site-defined label → value pairs (Boligtype, Etasje, Leieperiode, ...)
    pub attributes: IndexMap<String, String>,
    pub body_text: String,
}

/// Result of one pass of the crawl loop
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    /// Verdicts for identities not present in the seen set, in discovery order
    pub new_results: SeenSet,
    /// Candidate identities examined across all processed pages
    pub examined: usize,
    /// Search-result pages fetched
    pub pages: usize,
    /// Listings dropped because their page could not be fetched or parsed
    pub failed: Vec<ListingIdentity>,
}

/// What a completed run did, for the final log line
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pages: usize,
    pub examined: usize,
    pub good: usize,
    pub bad: usize,
    pub failed: usize,
    pub new_results: usize,
    pub total_known: usize,
}
