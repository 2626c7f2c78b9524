//! Live metadata reads for listed entries.
//!
//! Nothing here fails the caller: each attribute degrades to its own default
//! (now for the date, `None` for the size, `Failure`/`Unknown` for the backup
//! flag, `false` for the mutator). Attributes are read with `symlink_metadata`,
//! so a symlink reports its own size and date rather than its target's.

use chrono::{DateTime, Local};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::services::explorer::types::{BackupStatus, FileItem, ItemDetails};
use crate::services::fs_utils::backup_flag::{BackupFlagStore, XattrFlagStore};

// ── Dates ─────────────────────────────────────────────────────────────────────

/// Modification time, or `None` when it cannot be read.
pub fn read_modification_date(path: &Path) -> Option<DateTime<Local>> {
    match fs::symlink_metadata(path).and_then(|m| m.modified()) {
        Ok(time) => Some(DateTime::<Local>::from(time)),
        Err(e) => {
            log::debug!("Failed to read modification date of {}: {e}", path.display());
            None
        }
    }
}

/// Modification time with an explicit fallback for unreadable paths.
pub fn modification_date_or<F>(path: &Path, fallback: F) -> DateTime<Local>
where
    F: FnOnce() -> DateTime<Local>,
{
    read_modification_date(path).unwrap_or_else(fallback)
}

/// Modification time, falling back to the current time.
pub fn modification_date(path: &Path) -> DateTime<Local> {
    modification_date_or(path, Local::now)
}

// ── Size ──────────────────────────────────────────────────────────────────────

pub fn size(path: &Path) -> Option<u64> {
    match fs::symlink_metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            log::debug!("Failed to get file attributes for path: {}. Error: {e}", path.display());
            None
        }
    }
}

/// Human readable size using decimal units, `"N/A"` when absent.
///
/// ```
/// use sandbox_browser_lib::services::explorer::metadata::format_size;
/// assert_eq!(format_size(None), "N/A");
/// assert_eq!(format_size(Some(1)), "1 byte");
/// assert_eq!(format_size(Some(2_500_000)), "2.5 MB");
/// ```
pub fn format_size(size: Option<u64>) -> String {
    const UNITS: &[&str] = &["KB", "MB", "GB", "TB", "PB"];

    let Some(bytes) = size else {
        return "N/A".to_string();
    };
    match bytes {
        0 => return "Zero KB".to_string(),
        1 => return "1 byte".to_string(),
        2..=999 => return format!("{bytes} bytes"),
        _ => {}
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit_idx = 0;
    while value >= 999.95 && unit_idx < UNITS.len() - 1 {
        value /= 1000.0;
        unit_idx += 1;
    }

    let formatted = format!("{value:.1}");
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed} {}", UNITS[unit_idx])
}

// ── Backup flag ───────────────────────────────────────────────────────────────

pub fn backup_status(path: &Path) -> BackupStatus {
    backup_status_with(&XattrFlagStore, path)
}

pub fn backup_status_with<S>(store: &S, path: &Path) -> BackupStatus
where
    S: BackupFlagStore + ?Sized,
{
    match store.read_flag(path) {
        Ok(Some(true)) => BackupStatus::Excluded,
        Ok(Some(false)) => BackupStatus::Included,
        Ok(None) => BackupStatus::Unknown,
        Err(e) => {
            log::debug!("Failed to read backup flag of {}: {e}", path.display());
            BackupStatus::Failure
        }
    }
}

/// Set the backup-exclusion flag. Returns `false` if either the initial read or
/// the write fails.
pub fn set_backup_excluded(path: &Path, excluded: bool) -> bool {
    set_backup_excluded_with(&XattrFlagStore, path, excluded)
}

pub fn set_backup_excluded_with<S>(store: &S, path: &Path, excluded: bool) -> bool
where
    S: BackupFlagStore + ?Sized,
{
    let current = match store.read_flag(path) {
        Ok(current) => current,
        Err(e) => {
            log::warn!("Cannot mark {} (read failed): {e}", path.display());
            return false;
        }
    };

    if let Err(e) = store.write_flag(path, excluded) {
        log::warn!("Cannot mark {} (write failed): {e}", path.display());
        return false;
    }

    log::debug!(
        "Backup flag of {} changed {:?} -> {}",
        path.display(),
        current,
        excluded
    );
    true
}

// ── Snapshots ─────────────────────────────────────────────────────────────────

pub fn snapshot<S>(store: &S, item: &FileItem, with_backup_status: bool) -> ItemDetails
where
    S: BackupFlagStore + ?Sized,
{
    ItemDetails {
        item: item.clone(),
        modification_date: modification_date(&item.path),
        size: size(&item.path),
        backup_status: with_backup_status.then(|| backup_status_with(store, &item.path)),
    }
}

/// Snapshot many items in parallel. Output order matches `items`.
pub fn snapshot_all<S>(store: &S, items: &[FileItem], with_backup_status: bool) -> Vec<ItemDetails>
where
    S: BackupFlagStore + ?Sized,
{
    items
        .par_iter()
        .map(|item| snapshot(store, item, with_backup_status))
        .collect()
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
