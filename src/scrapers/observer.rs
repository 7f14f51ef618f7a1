use crate::models::ListingRecord;
use crate::scrapers::traits::ListingObserver;
use tracing::{debug, info};

/// Reports listing diagnostics as tracing events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ListingObserver for TracingObserver {
    fn good_listing(&self, url: &str, record: &ListingRecord) {
        info!("\t{} kr: {}", record.price, record.title);
        for (label, value) in &record.attributes {
            info!("\t{} {}", label, value);
        }
        debug!("\t{}", url);
    }

    fn bad_listing(&self, url: &str, matched: &[String]) {
        for term in matched {
            debug!("\tfound word: {}", term);
        }
        debug!("\trejected {}", url);
    }

    fn inconclusive(&self, url: &str, reason: &str) {
        debug!("\tnot classified ({}), keeping {}", reason, url);
    }
}
