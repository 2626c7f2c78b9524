//! Per-path lock for backup flag mutations.
//!
//! Setting the flag is a read-then-write pair, so two toggles on the same path
//! can interleave. Callers that may toggle concurrently take the path's lock
//! first. Different paths never block each other.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
pub struct PathLocks {
    held: Mutex<HashSet<PathBuf>>,
    released: Condvar,
}

/// Releases the path on drop.
pub struct PathLockGuard<'a> {
    locks: &'a PathLocks,
    path: PathBuf,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn held(&self) -> MutexGuard<'_, HashSet<PathBuf>> {
        self.held.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block until `path` is free, then take it.
    pub fn acquire(&self, path: &Path) -> PathLockGuard<'_> {
        let mut held = self.held();
        while held.contains(path) {
            held = self
                .released
                .wait(held)
                .unwrap_or_else(PoisonError::into_inner);
        }
        held.insert(path.to_path_buf());

        PathLockGuard {
            locks: self,
            path: path.to_path_buf(),
        }
    }
}

impl Drop for PathLockGuard<'_> {
    fn drop(&mut self) {
        self.locks.held().remove(&self.path);
        self.locks.released.notify_all();
    }
}

#[cfg(test)]
#[path = "tests/path_lock_tests.rs"]
mod tests;
