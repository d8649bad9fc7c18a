//! Exclusive ownership of a storage file.
//!
//! A running server owns its storage file: it holds every mapping in memory
//! and rewrites the whole file on each new link, so any other writer's records
//! would be lost on the next rewrite. Writers therefore take an advisory lock
//! on a `<storage>.lock` sibling and refuse to start while someone else holds it.

use std::fs::{File, OpenOptions, TryLockError};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;

/// Held advisory lock on a storage file; released on drop.
#[derive(Debug)]
pub struct StorageLock {
    path: PathBuf,
    _file: File,
}

impl StorageLock {
    /// Takes the lock for `storage_file` without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Locked`] when another process (or another handle
    /// in this one) holds it, or [`StoreError::Io`] when the lock file cannot
    /// be opened.
    pub fn acquire(storage_file: &Path) -> Result<Self, StoreError> {
        let path = lock_path(storage_file);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        match file.try_lock() {
            Ok(()) => {
                debug!(path = %path.display(), "Acquired storage lock");
                Ok(Self { path, _file: file })
            }
            Err(TryLockError::WouldBlock) => Err(StoreError::Locked {
                path: storage_file.to_path_buf(),
            }),
            Err(TryLockError::Error(e)) => Err(StoreError::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<storage>.lock` next to the storage file.
pub fn lock_path(storage_file: &Path) -> PathBuf {
    let mut name = storage_file.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}
