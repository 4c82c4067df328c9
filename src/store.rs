//! File store abstraction layer
//!
//! The manifest bumper never touches the filesystem directly. It goes through
//! the [FileStore] trait, which has two implementations:
//!
//! - [FsStore]: reads and writes real files with `std::fs`
//! - [MemoryStore]: an in-memory map of paths for testing
//!
//! Neither implementation locks files, renames atomically or keeps backups.
//! Concurrent writers to the same path race and the last one wins.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::error::{BumpError, Result};

/// Whole-file read and write operations
///
/// Implementations map any failure to [BumpError::Io] carrying the path.
pub trait FileStore: Send + Sync {
    /// Read the full content of `path`
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the full content of `path` with `content`
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Store backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = std::fs::read(path).map_err(|e| BumpError::io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "read file");
        Ok(bytes)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        std::fs::write(path, content).map_err(|e| BumpError::io(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

/// In-memory store for testing without touching the disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    read_only: AtomicBool,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files().insert(path.into(), content.into());
    }

    /// Current content of a file as UTF-8, if present
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Make every subsequent write fail with a permission error
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn files(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileStore for MemoryStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files().get(path).cloned().ok_or_else(|| {
            BumpError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(BumpError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            ));
        }
        self.files().insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}
