//! File-backed market data store.
//!
//! Snapshots are cached as dated JSON files (`YYYY-MM-DD.json`) under a
//! cache directory. Retrieval walks a fixed ladder: a fresh cache hit, a
//! live provider, any stale cache, and finally the compiled-in reference
//! snapshot. Files past the cleanup horizon are swept when the store is
//! opened. None of this leaks into the stress engine, which stays purely
//! functional; the retry-and-fallback policy lives here only.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use tracing::{info, warn};

use crate::error::{DataError, DataResult};
use crate::market_data::{reference_snapshot, MarketSnapshot};

/// Freshness and cleanup horizons for cached snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// A cache file younger than this many days is served without asking
    /// the provider.
    pub freshness_days: i64,

    /// Cache files older than this many days are deleted on open.
    pub cleanup_days: i64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            freshness_days: 7,
            cleanup_days: 14,
        }
    }
}

/// A snapshot read back from the cache directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedSnapshot {
    /// The snapshot itself.
    pub snapshot: MarketSnapshot,

    /// The cache file's date.
    pub cached_on: NaiveDate,

    /// Whether the file is within the freshness window.
    pub is_fresh: bool,
}

/// How a fetched snapshot was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Served from a fresh cache file.
    Cache,
    /// Fetched live from the provider and cached.
    Fresh,
    /// Provider failed; served from a stale cache file.
    StaleCache,
    /// Provider failed and no cache existed; compiled-in reference data.
    Reference,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Provenance::Cache => "cache",
            Provenance::Fresh => "live",
            Provenance::StaleCache => "stale cache",
            Provenance::Reference => "reference data",
        };
        write!(f, "{label}")
    }
}

/// A fetched snapshot together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// The snapshot.
    pub snapshot: MarketSnapshot,

    /// How it was obtained.
    pub provenance: Provenance,
}

/// Supplies live market snapshots.
///
/// The extension seam for real integrations (MAS rates, index feeds). The
/// store only needs a name for diagnostics and a fallible fetch.
pub trait MarketDataProvider {
    /// Provider name for diagnostics.
    fn name(&self) -> &str;

    /// Fetches a current snapshot.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the upstream source cannot be
    /// reached or returns unusable data; the store then falls back.
    fn fetch(&self) -> DataResult<MarketSnapshot>;
}

/// A provider that always serves the compiled-in reference snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceProvider;

impl MarketDataProvider for ReferenceProvider {
    fn name(&self) -> &str {
        "reference"
    }

    fn fetch(&self) -> DataResult<MarketSnapshot> {
        Ok(reference_snapshot())
    }
}

/// File-backed market data store with dated JSON cache files.
#[derive(Debug, Clone)]
pub struct MarketDataStore {
    cache_dir: PathBuf,
    policy: CachePolicy,
}

impl MarketDataStore {
    /// Opens a store, creating the cache directory if needed and sweeping
    /// files past the cleanup horizon.
    ///
    /// # Errors
    ///
    /// Returns an error when the cache directory cannot be created.
    pub fn new(cache_dir: impl AsRef<Path>) -> DataResult<Self> {
        Self::with_policy(cache_dir, CachePolicy::default())
    }

    /// Opens a store with an explicit cache policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the cache directory cannot be created.
    pub fn with_policy(cache_dir: impl AsRef<Path>, policy: CachePolicy) -> DataResult<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir)
            .map_err(|e| DataError::io(cache_dir.display().to_string(), e))?;

        let store = Self { cache_dir, policy };
        store.sweep_old_cache();
        Ok(store)
    }

    /// Returns the cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_file_for(&self, date: NaiveDate) -> PathBuf {
        self.cache_dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    /// Saves a snapshot under today's cache file.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn save_snapshot(&self, snapshot: &MarketSnapshot) -> DataResult<()> {
        let path = self.cache_file_for(Utc::now().date_naive());
        let body = serde_json::to_string_pretty(snapshot)
            .map_err(|e| DataError::Serialization {
                reason: e.to_string(),
            })?;

        fs::write(&path, body).map_err(|e| DataError::io(path.display().to_string(), e))?;
        info!(path = %path.display(), "cached market snapshot");
        Ok(())
    }

    /// Returns the most recent cached snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the cache directory cannot be listed. A
    /// corrupt cache file is skipped, not fatal.
    pub fn cached_snapshot(&self) -> DataResult<Option<CachedSnapshot>> {
        let today = Utc::now().date_naive();
        let mut dated_files = self.dated_cache_files()?;

        // Newest first.
        dated_files.sort_by(|a, b| b.0.cmp(&a.0));

        for (date, path) in dated_files {
            match fs::read_to_string(&path) {
                Ok(body) => match serde_json::from_str::<MarketSnapshot>(&body) {
                    Ok(snapshot) => {
                        let age_days = (today - date).num_days();
                        return Ok(Some(CachedSnapshot {
                            snapshot,
                            cached_on: date,
                            is_fresh: age_days < self.policy.freshness_days,
                        }));
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "skipping corrupt cache file");
                    }
                },
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable cache file");
                }
            }
        }

        Ok(None)
    }

    /// Fetches a snapshot through the fallback ladder.
    ///
    /// Order: fresh cache (unless `force_refresh`), the provider, any stale
    /// cache, the reference snapshot. Provider and reference results are
    /// written back to the cache.
    ///
    /// # Errors
    ///
    /// Only fails when the cache directory itself is unusable; provider
    /// failures fall through the ladder instead.
    pub fn fetch(
        &self,
        provider: &dyn MarketDataProvider,
        force_refresh: bool,
    ) -> DataResult<FetchOutcome> {
        if !force_refresh {
            if let Some(cached) = self.cached_snapshot()? {
                if cached.is_fresh {
                    info!(cached_on = %cached.cached_on, "using cached market data");
                    return Ok(FetchOutcome {
                        snapshot: cached.snapshot,
                        provenance: Provenance::Cache,
                    });
                }
            }
        }

        info!(provider = provider.name(), "fetching market data");
        match provider.fetch() {
            Ok(snapshot) => {
                self.save_snapshot(&snapshot)?;
                Ok(FetchOutcome {
                    snapshot,
                    provenance: Provenance::Fresh,
                })
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "market data fetch failed");

                if let Some(cached) = self.cached_snapshot()? {
                    warn!(cached_on = %cached.cached_on, "falling back to stale cached data");
                    return Ok(FetchOutcome {
                        snapshot: cached.snapshot,
                        provenance: Provenance::StaleCache,
                    });
                }

                warn!("falling back to reference market data");
                let snapshot = reference_snapshot();
                self.save_snapshot(&snapshot)?;
                Ok(FetchOutcome {
                    snapshot,
                    provenance: Provenance::Reference,
                })
            }
        }
    }

    /// Lists cache files whose stems parse as dates.
    fn dated_cache_files(&self) -> DataResult<Vec<(NaiveDate, PathBuf)>> {
        let entries = fs::read_dir(&self.cache_dir)
            .map_err(|e| DataError::io(self.cache_dir.display().to_string(), e))?;

        let mut result = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                        result.push((date, path));
                    }
                }
            }
        }

        Ok(result)
    }

    /// Deletes cache files past the cleanup horizon. Failures are logged,
    /// never fatal: a sweep must not block a read.
    fn sweep_old_cache(&self) {
        let cutoff = Utc::now().date_naive() - Duration::days(self.policy.cleanup_days);

        let Ok(dated_files) = self.dated_cache_files() else {
            return;
        };

        for (date, path) in dated_files {
            if date < cutoff {
                match fs::remove_file(&path) {
                    Ok(()) => info!(path = %path.display(), "removed expired cache file"),
                    Err(e) => warn!(path = %path.display(), error = %e, "cache sweep failed"),
                }
            }
        }
    }
}
