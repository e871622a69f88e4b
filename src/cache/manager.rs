//! Cache manager for persisting the raw API response to disk
//!
//! Provides a `CacheManager` that mirrors the last network response byte for
//! byte into a single file, judging freshness by the file's modification time.

use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use thiserror::Error;
use tracing::{debug, warn};

/// Application name used for the per-user cache directory
const APP_NAME: &str = "gvacli";

/// Name of the cache file inside the cache directory
pub const CACHE_FILE_NAME: &str = "flightinfos.json";

/// Default time-to-live of the cache file
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Errors that can occur when reading the cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// No usable cache location for this process
    #[error("Cache is unavailable")]
    Unavailable,

    /// The cache file could not be read
    #[error("Unable to read cache file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Manages the on-disk copy of the last API response
///
/// The file lives in an XDG-compliant cache directory (`~/.cache/gvacli/` on
/// Linux). If that directory cannot be determined or created the manager is
/// built without a location and behaves as a permanent cache miss.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Path to the cache file, `None` when caching is unavailable
    file_path: Option<PathBuf>,
    /// Maximum age of a usable cache file
    ttl: Duration,
    /// Set when the user asked to bypass the cache
    disabled: bool,
}

impl CacheManager {
    /// Creates a CacheManager using the XDG-compliant cache directory
    ///
    /// Never fails: when no directory can be set up, caching is turned off for
    /// the lifetime of the returned manager.
    pub fn new(ttl: Duration) -> Self {
        let Some(project_dirs) = ProjectDirs::from("", "", APP_NAME) else {
            warn!("Unable to determine local user cache directory");
            return Self::unavailable(ttl);
        };
        Self::with_dir(project_dirs.cache_dir(), ttl)
    }

    /// Creates a CacheManager storing its file in `cache_dir`
    ///
    /// The directory is created if missing; on failure caching is disabled.
    pub fn with_dir(cache_dir: impl AsRef<Path>, ttl: Duration) -> Self {
        let cache_dir = cache_dir.as_ref();
        if let Err(e) = fs::create_dir_all(cache_dir) {
            warn!(dir = %cache_dir.display(), error = %e, "Unable to create cache directory");
            return Self::unavailable(ttl);
        }

        Self {
            file_path: Some(cache_dir.join(CACHE_FILE_NAME)),
            ttl,
            disabled: false,
        }
    }

    fn unavailable(ttl: Duration) -> Self {
        Self {
            file_path: None,
            ttl,
            disabled: false,
        }
    }

    /// Turns the cache off (e.g. `--no-cache`); writes still happen so the next
    /// run can use the fresh data
    pub fn disable(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Path to the cache file, if caching is available
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_available(&self) -> bool {
        self.file_path.is_some()
    }

    /// Returns true if the cache file can be used instead of a network fetch
    ///
    /// Requires caching enabled and available, a non-empty file, and an age
    /// below the TTL. Any filesystem error counts as not fresh.
    pub fn is_fresh(&self) -> bool {
        if self.disabled {
            return false;
        }
        let Some(path) = &self.file_path else {
            return false;
        };
        let Ok(metadata) = fs::metadata(path) else {
            return false;
        };
        if metadata.len() == 0 {
            return false;
        }
        let Ok(modified) = metadata.modified() else {
            return false;
        };

        // A modification time in the future counts as brand new
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        debug!(age_secs = age.as_secs_f64(), ttl_secs = self.ttl.as_secs(), "cache age");
        age < self.ttl
    }

    /// Reads the raw cache file contents
    pub fn read(&self) -> Result<Vec<u8>, CacheError> {
        let path = self.file_path.as_ref().ok_or(CacheError::Unavailable)?;
        fs::read(path).map_err(|source| CacheError::Read {
            path: path.clone(),
            source,
        })
    }

    /// Writes `data` to the cache file
    ///
    /// Best-effort: failures are logged and otherwise ignored.
    pub fn write(&self, data: &[u8]) {
        let Some(path) = &self.file_path else {
            return;
        };
        match write_file(path, data) {
            Ok(()) => debug!(path = %path.display(), bytes = data.len(), "cache written"),
            Err(e) => warn!(path = %path.display(), error = %e, "Unable to write cache file"),
        }
    }
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.write_all(data)
}
