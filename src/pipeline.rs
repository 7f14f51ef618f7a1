use crate::config::ScoutConfig;
use crate::error::Result;
use crate::models::RunSummary;
use crate::report::ReportWriter;
use crate::scrapers::{Crawler, Fetcher};
use crate::store::{self, SeenStore};
use chrono::Utc;
use tracing::info;

/// One full run: load the seen set, crawl, write the reports, then persist
/// the merged seen set.
///
/// Nothing is written before the crawl has finished, so a failed run leaves
/// the cache and both reports exactly as they were.
pub async fn run<F: Fetcher>(config: &ScoutConfig, crawler: &Crawler<F>) -> Result<RunSummary> {
    let started_at = Utc::now();
    let seen_store = SeenStore::new(&config.cache_path);
    let writer = ReportWriter::new(&config.good_path, &config.bad_path);

    let old_results = seen_store.load().await?;
    info!(
        "Loaded {} previously seen listings from {}",
        old_results.len(),
        seen_store.path().display()
    );

    let outcome = crawler.crawl(&config.search, &old_results).await?;
    let (good, bad) = writer.partition_and_write(&outcome.new_results).await?;

    let new_count = outcome.new_results.len();
    let all_results = store::merge(outcome.new_results, old_results);
    seen_store.save(&all_results).await?;

    Ok(RunSummary {
        started_at,
        finished_at: Utc::now(),
        pages: outcome.pages,
        examined: outcome.examined,
        good,
        bad,
        failed: outcome.failed.len(),
        new_results: new_count,
        total_known: all_results.len(),
    })
}
