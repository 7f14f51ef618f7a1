use anyhow::Context;
use clap::Parser;
use finn_scout::scrapers::{Crawler, FinnParser, HttpFetcher};
use finn_scout::{pipeline, Args};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "finn_scout=info".into()),
        )
        .init();

    let config = Args::parse().into_config();

    info!("🏠 Finn Scout - rentals around ({}, {})", config.search.latitude, config.search.longitude);
    info!("==========================================");

    let fetcher = HttpFetcher::with_timeout(config.timeout).context("Failed to create HTTP client")?;
    let parser = FinnParser::new().context("Failed to build listing parser")?;
    let crawler = Crawler::new(fetcher, parser)
        .with_failure_policy(config.failure_policy)
        .with_delay(config.request_delay);

    let summary = pipeline::run(&config, &crawler)
        .await
        .context("Scrape run failed")?;

    info!(
        "✅ Processed {} adverts on {} pages, found {} new good & {} new crappy",
        summary.examined, summary.pages, summary.good, summary.bad
    );
    info!(
        "new results: {}, all results: {}, skipped: {}",
        summary.new_results, summary.total_known, summary.failed
    );
    info!(
        "Finished in {}s",
        (summary.finished_at - summary.started_at).num_seconds()
    );

    Ok(())
}
