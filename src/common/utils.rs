//! Small shared utilities.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::common::constants::LOCK_FILE_NAME;

/// Display a path with the home directory abbreviated to `~`.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        return format!("~/{}", stripped.display());
    }
    path.display().to_string()
}

/// Refuse to run as root.
///
/// themr writes into the invoking user's config and cache directories;
/// a root run would leave root-owned files behind.
pub fn running_as_root() -> bool {
    nix::unistd::Uid::effective().is_root()
}

/// Guard holding the single-instance advisory lock.
///
/// The lock is released when the guard is dropped (or the process exits).
pub struct InstanceLock {
    _file: File,
}

/// Try to take the single-instance lock.
///
/// Returns `Ok(None)` when another themr process already holds it, so the
/// caller can skip this invocation instead of interleaving writes with the
/// running one.
pub fn acquire_instance_lock() -> Result<Option<InstanceLock>> {
    let lock_path = lock_path()?;
    if let Some(parent) = lock_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create lock directory {}", parent.display()))?;
    }

    let file = File::create(&lock_path)
        .with_context(|| format!("Failed to create lock file {}", private_path(&lock_path)))?;

    // Call through the trait: newer std has an inherent method with the
    // same name and a different error type.
    match FileExt::try_lock_exclusive(&file) {
        Ok(()) => Ok(Some(InstanceLock { _file: file })),
        Err(_) => Ok(None),
    }
}

fn lock_path() -> Result<PathBuf> {
    let base = dirs::runtime_dir().unwrap_or_else(std::env::temp_dir);
    Ok(base.join(LOCK_FILE_NAME))
}
