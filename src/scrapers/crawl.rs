use crate::classifier::Classification;
use crate::error::{Result, ScoutError};
use crate::models::{CrawlOutcome, SeenSet, Verdict};
use crate::scrapers::finn::FinnParser;
use crate::scrapers::observer::TracingObserver;
use crate::scrapers::traits::{FetchResponse, Fetcher, ListingObserver};
use crate::scrapers::types::SearchParams;
use crate::store;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// What to do when a single listing page cannot be fetched or parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingFailurePolicy {
    /// Abort the whole run; nothing from it is persisted
    #[default]
    Abort,
    /// Log the listing, leave it out of the results and carry on.
    /// It stays unseen and is tried again on the next run.
    Skip,
}

/// Pages through a search and classifies every listing not seen before.
/// Requests are issued one at a time, in discovery order.
pub struct Crawler<F> {
    fetcher: F,
    parser: FinnParser,
    observer: Arc<dyn ListingObserver>,
    policy: ListingFailurePolicy,
    delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, parser: FinnParser) -> Self {
        Self {
            fetcher,
            parser,
            observer: Arc::new(TracingObserver),
            policy: ListingFailurePolicy::default(),
            delay: Duration::ZERO,
            last_request: Mutex::new(None),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ListingObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_failure_policy(mut self, policy: ListingFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Minimum spacing between two consecutive requests
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Crawl the result pages of `params`, skipping identities in `seen`.
    ///
    /// Stops after the first page holding fewer than `page_size` adverts.
    pub async fn crawl(&self, params: &SearchParams, seen: &SeenSet) -> Result<CrawlOutcome> {
        let mut outcome = CrawlOutcome::default();

        for page_url in params.page_urls()? {
            info!("Processing:\n{}", page_url);

            let response = self.fetch(page_url.as_str()).await?;
            let candidates = self.parser.extract_identities(&response.body, &page_url);
            outcome.pages += 1;

            for identity in &candidates {
                outcome.examined += 1;
                info!("{} advert count", outcome.examined);
                debug!("{}", identity);

                if store::contains(seen, identity) {
                    info!("skipping/already seen: {}", identity);
                    continue;
                }
                // Adverts can shift onto the next page while we paginate
                if outcome.new_results.contains_key(identity) || outcome.failed.contains(identity) {
                    debug!("already handled this run: {}", identity);
                    continue;
                }

                match self.parse_listing(identity).await {
                    Ok(verdict) => {
                        outcome.new_results.insert(identity.clone(), verdict);
                    }
                    Err(e) if self.policy == ListingFailurePolicy::Skip && e.is_listing_local() => {
                        warn!("Skipping listing {}: {}", identity, e);
                        outcome.failed.push(identity.clone());
                    }
                    Err(e) => return Err(e),
                }
            }

            if candidates.len() < params.page_size {
                info!(
                    "---BREAK--- page size: {}, adverts on page: {}",
                    params.page_size,
                    candidates.len()
                );
                break;
            }
        }

        Ok(outcome)
    }

    /// Fetch one listing and decide whether it passes the filter
    pub async fn parse_listing(&self, identity: &str) -> Result<Verdict> {
        let response = self.fetch(identity).await?;
        let parsed = self.parser.parse_listing(identity, &response.body)?;

        match &parsed.classification {
            Classification::Good => self.observer.good_listing(identity, &parsed.record),
            Classification::Bad { matched } => self.observer.bad_listing(identity, matched),
            Classification::Inconclusive { reason } => {
                self.observer.inconclusive(identity, reason);
                self.observer.good_listing(identity, &parsed.record);
            }
        }

        Ok(parsed.classification.verdict())
    }

    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        self.throttle().await;

        let response = self.fetcher.fetch(url).await?;
        if !response.is_success() {
            warn!("{} returned status {}", url, response.status);
            return Err(ScoutError::Fetch {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(response)
    }

    async fn throttle(&self) {
        if self.delay.is_zero() {
            return;
        }
        let wait = self
            .last_request
            .lock()
            .ok()
            .and_then(|last| *last)
            .map(|at| self.delay.saturating_sub(at.elapsed()))
            .unwrap_or(Duration::ZERO);
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(Instant::now());
        }
    }
}
