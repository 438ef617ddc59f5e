//! `retrying delete <path>...` – delete paths with idempotent retries.

use anyhow::{bail, Result};
use retrying_core::retry::{self, RetryConfig};
use retrying_core::status::Status;
use std::fs;
use std::path::{Path, PathBuf};

/// Deletes every path, retrying transient IO failures. A path that has
/// vanished by the time a retry runs counts as deleted; a path missing on the
/// first attempt is reported as an error. Keeps going after a failure and
/// fails at the end if any path could not be deleted.
pub fn run_delete(paths: &[PathBuf], recursive: bool, config: &RetryConfig) -> Result<()> {
    let mut failed = 0usize;
    for path in paths {
        match retry::delete_with_retries(|| remove_path(path, recursive), config) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "deleted");
                println!("Deleted {}", path.display());
            }
            Err(status) => {
                tracing::warn!(path = %path.display(), "could not delete: {}", status);
                eprintln!("{}: {}", path.display(), status);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} path(s) could not be deleted", paths.len());
    }
    Ok(())
}

fn remove_path(path: &Path, recursive: bool) -> Result<(), Status> {
    let meta = fs::symlink_metadata(path)?;
    if !meta.is_dir() {
        fs::remove_file(path)?;
    } else if recursive {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_dir(path)?;
    }
    Ok(())
}
