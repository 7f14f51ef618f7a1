use crate::error::Result;
use crate::models::{ListingIdentity, SeenSet};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_GOOD_PATH: &str = "finn_new_listings.org";
pub const DEFAULT_BAD_PATH: &str = "/tmp/finn_rejected_listings.org";

/// Writes newly classified listings to one file per verdict
#[derive(Debug, Clone)]
pub struct ReportWriter {
    good_path: PathBuf,
    bad_path: PathBuf,
}

impl ReportWriter {
    pub fn new(good_path: impl Into<PathBuf>, bad_path: impl Into<PathBuf>) -> Self {
        Self {
            good_path: good_path.into(),
            bad_path: bad_path.into(),
        }
    }

    /// Split `new_results` by verdict and write both groups.
    /// Returns `(good, bad)` counts.
    pub async fn partition_and_write(&self, new_results: &SeenSet) -> Result<(usize, usize)> {
        let (good, bad) = partition(new_results);

        write_urls(&good, &self.good_path).await?;
        write_urls(&bad, &self.bad_path).await?;

        Ok((good.len(), bad.len()))
    }
}

/// Good and bad identities, each in discovery order
pub fn partition(results: &SeenSet) -> (Vec<&ListingIdentity>, Vec<&ListingIdentity>) {
    let mut good = Vec::new();
    let mut bad = Vec::new();
    for (identity, verdict) in results {
        if *verdict {
            good.push(identity);
        } else {
            bad.push(identity);
        }
    }
    (good, bad)
}

/// Overwrite `path` with one URL per line. An empty list leaves the file
/// alone and returns `false`.
pub async fn write_urls(urls: &[&ListingIdentity], path: &Path) -> Result<bool> {
    if urls.is_empty() {
        return Ok(false);
    }

    let mut contents = String::new();
    for url in urls {
        contents.push_str(url);
        contents.push('\n');
    }
    tokio::fs::write(path, contents).await?;

    info!("wrote {} listings to {}", urls.len(), path.display());
    Ok(true)
}
