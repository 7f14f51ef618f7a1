//! Persisted seen set: every listing ever classified and its verdict.
//!
//! The cache only grows. It is loaded whole at the start of a run and
//! written whole at the end.

use crate::error::{Result, ScoutError};
use crate::models::SeenSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CACHE_PATH: &str = "finn_scrape.json";

/// Seen set stored as a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load previous findings. A missing file is an empty seen set; a file
    /// that does not deserialize is an error, never silently reset.
    pub async fn load(&self) -> Result<SeenSet> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No cache at {}, starting empty", self.path.display());
                return Ok(SeenSet::new());
            }
            Err(e) => return Err(e.into()),
        };

        let seen: SeenSet =
            serde_json::from_slice(&bytes).map_err(|source| ScoutError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} seen listings from {}", seen.len(), self.path.display());
        Ok(seen)
    }

    /// Overwrite the cache. Written to a sibling temp file first and renamed
    /// into place, so an interrupted save leaves the old snapshot intact.
    pub async fn save(&self, entries: &SeenSet) -> Result<()> {
        let json = serde_json::to_vec(entries)?;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        info!("💾 Saved {} seen listings to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

pub fn contains(seen: &SeenSet, identity: &str) -> bool {
    seen.contains_key(identity)
}

/// Union of both sets. `new_entries` wins on a shared key and comes first
/// in iteration order.
pub fn merge(new_entries: SeenSet, old_entries: SeenSet) -> SeenSet {
    let mut merged = new_entries;
    for (identity, verdict) in old_entries {
        merged.entry(identity).or_insert(verdict);
    }
    merged
}
