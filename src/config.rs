use crate::report::{DEFAULT_BAD_PATH, DEFAULT_GOOD_PATH};
use crate::scrapers::types::{SearchParams, FINN_LETTINGS_SEARCH};
use crate::scrapers::ListingFailurePolicy;
use crate::store::DEFAULT_CACHE_PATH;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Scrape finn.no rentals, skipping adverts already seen and filtering out
/// basements, shared housing and short-term lets.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Search page the query is built on
    #[arg(long, env = "FINN_SCOUT_BASE_URL", default_value = FINN_LETTINGS_SEARCH)]
    pub base_url: String,

    /// Search radius in meters
    #[arg(long, env = "FINN_SCOUT_RADIUS", default_value_t = 3000)]
    pub radius: u32,

    /// Minimum monthly rent
    #[arg(long, env = "FINN_SCOUT_MIN_PRICE", default_value_t = 7000)]
    pub min_price: u32,

    /// Maximum monthly rent
    #[arg(long, env = "FINN_SCOUT_MAX_PRICE", default_value_t = 15500)]
    pub max_price: u32,

    /// Minimum living area in square meters
    #[arg(long, env = "FINN_SCOUT_MIN_AREA", default_value_t = 34)]
    pub min_area: u32,

    /// Latitude of the search center
    #[arg(long, env = "FINN_SCOUT_LAT", default_value_t = 59.970230202946425, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the search center
    #[arg(long, env = "FINN_SCOUT_LON", default_value_t = 10.782417360565233, allow_negative_numbers = true)]
    pub lon: f64,

    /// Adverts per result page
    #[arg(long, env = "FINN_SCOUT_PAGE_SIZE", default_value_t = 50)]
    pub page_size: usize,

    /// Page budget; pages 1 to N-1 are scanned
    #[arg(long, env = "FINN_SCOUT_MAX_PAGES", default_value_t = 4)]
    pub max_pages: usize,

    /// Seen-listing cache
    #[arg(long, env = "FINN_SCOUT_CACHE", default_value = DEFAULT_CACHE_PATH)]
    pub cache: PathBuf,

    /// Output file for new listings that passed the filter
    #[arg(long, env = "FINN_SCOUT_GOOD_OUT", default_value = DEFAULT_GOOD_PATH)]
    pub good_out: PathBuf,

    /// Output file for new listings that were rejected
    #[arg(long, env = "FINN_SCOUT_BAD_OUT", default_value = DEFAULT_BAD_PATH)]
    pub bad_out: PathBuf,

    /// Keep going when a single listing fails to load instead of aborting
    #[arg(long, env = "FINN_SCOUT_SKIP_FAILED")]
    pub skip_failed_listings: bool,

    /// Minimum pause between requests, in milliseconds
    #[arg(long, env = "FINN_SCOUT_DELAY_MS", default_value_t = 0)]
    pub delay_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, env = "FINN_SCOUT_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

/// Everything a run needs, fixed at startup
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub search: SearchParams,
    pub cache_path: PathBuf,
    pub good_path: PathBuf,
    pub bad_path: PathBuf,
    pub failure_policy: ListingFailurePolicy,
    pub request_delay: Duration,
    pub timeout: Duration,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            search: SearchParams::default(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            good_path: PathBuf::from(DEFAULT_GOOD_PATH),
            bad_path: PathBuf::from(DEFAULT_BAD_PATH),
            failure_policy: ListingFailurePolicy::Abort,
            request_delay: Duration::ZERO,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Args {
    pub fn into_config(self) -> ScoutConfig {
        ScoutConfig {
            search: SearchParams {
                base_url: self.base_url,
                radius: self.radius,
                min_price: self.min_price,
                max_price: self.max_price,
                min_area: self.min_area,
                latitude: self.lat,
                longitude: self.lon,
                page_size: self.page_size,
                max_pages: self.max_pages,
            },
            cache_path: self.cache,
            good_path: self.good_out,
            bad_path: self.bad_out,
            failure_policy: if self.skip_failed_listings {
                ListingFailurePolicy::Skip
            } else {
                ListingFailurePolicy::Abort
            },
            request_delay: Duration::from_millis(self.delay_ms),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
