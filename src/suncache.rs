//! Sun-times cache: process-independent persistence of the next
//! sunrise/sunset pair.
//!
//! The cache knows three states only: present, absent, corrupt. There is no
//! TTL here; whether a parseable cache is stale is the external scheduler's
//! call (it deletes the file, or runs `themr update`, when it wants fresh
//! times). Writes go through a sibling temp file and an atomic rename so a
//! process killed mid-write never leaves a partial cache for the next
//! invocation.

use anyhow::{Context, Result, ensure};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::SUN_TIMES_FILE_NAME;
use crate::common::utils::private_path;
use crate::settings;

/// The next sunrise and sunset as absolute, timezone-aware instants.
///
/// Serialized as RFC 3339 with offset, so a round-trip reproduces the exact
/// instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Local>,
    pub sunset: DateTime<Local>,
}

impl SunTimes {
    /// Construct a pair, enforcing `sunrise < sunset` within the day.
    pub fn new(sunrise: DateTime<Local>, sunset: DateTime<Local>) -> Result<Self> {
        ensure!(
            sunrise < sunset,
            "sunrise ({sunrise}) must precede sunset ({sunset})"
        );
        Ok(Self { sunrise, sunset })
    }
}

/// Cache read/write failures that the caller distinguishes on.
#[derive(Debug)]
pub enum CacheError {
    /// No cache file; recover by invoking the sun-time provider.
    Absent(PathBuf),
    /// Bytes exist but do not decode into a sunrise/sunset pair. Surfaced
    /// rather than silently regenerated; `themr update` is the explicit
    /// recovery lever.
    Corrupt(PathBuf),
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::Absent(path) => {
                write!(f, "No sun times cache at {}", path.display())
            }
            CacheError::Corrupt(path) => {
                write!(f, "Sun times cache at {} is corrupt", path.display())
            }
        }
    }
}

impl std::error::Error for CacheError {}

/// Handle to the on-disk cache file.
pub struct SunTimesCache {
    path: PathBuf,
}

impl SunTimesCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Cache in the standard location: the XDG cache directory, or the
    /// config directory when a custom one was set via `--config` (keeps
    /// test and scripted runs self-contained).
    pub fn at_default_location() -> Result<Self> {
        let dir = match settings::get_custom_config_dir() {
            Some(custom) => custom,
            None => dirs::cache_dir()
                .context("Could not determine cache directory")?
                .join("themr"),
        };
        Ok(Self::new(dir.join(SUN_TIMES_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_present(&self) -> bool {
        self.path.exists()
    }

    /// Decode the cached pair.
    pub fn read(&self) -> Result<SunTimes> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CacheError::Absent(self.path.clone()).into());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read sun times cache {}", private_path(&self.path))
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|_| CacheError::Corrupt(self.path.clone()).into())
    }

    /// Persist the pair atomically.
    pub fn write(&self, times: &SunTimes) -> Result<()> {
        let parent = self
            .path
            .parent()
            .context("Cache path has no parent directory")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;

        let tmp = tempfile::NamedTempFile::new_in(parent)
            .context("Failed to create temporary cache file")?;
        serde_json::to_writer_pretty(&tmp, times).context("Failed to encode sun times")?;
        tmp.persist(&self.path).map_err(|e| e.error).with_context(|| {
            format!(
                "Failed to persist sun times cache to {}",
                private_path(&self.path)
            )
        })?;
        Ok(())
    }

    /// Delete the cache file if it exists.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| {
                format!(
                    "Failed to remove sun times cache {}",
                    private_path(&self.path)
                )
            }),
        }
    }
}
