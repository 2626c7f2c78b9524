use super::*;
use crate::services::explorer::types::FileType;
use chrono::TimeZone;
use filetime::FileTime;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

/// In-memory flag store. Reads fail for paths that do not exist on disk.
#[derive(Default)]
struct MemoryStore {
    flags: Mutex<HashMap<PathBuf, bool>>,
    writes: AtomicUsize,
}

impl BackupFlagStore for MemoryStore {
    fn read_flag(&self, path: &Path) -> io::Result<Option<bool>> {
        if !path.exists() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }
        Ok(self.flags.lock().unwrap().get(path).copied())
    }

    fn write_flag(&self, path: &Path, excluded: bool) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.flags.lock().unwrap().insert(path.to_path_buf(), excluded);
        Ok(())
    }
}

struct UnsupportedStore;

impl BackupFlagStore for UnsupportedStore {
    fn read_flag(&self, _path: &Path) -> io::Result<Option<bool>> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no xattrs"))
    }

    fn write_flag(&self, _path: &Path, _excluded: bool) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "no xattrs"))
    }
}

/// Reads succeed, writes fail.
struct ReadOnlyStore;

impl BackupFlagStore for ReadOnlyStore {
    fn read_flag(&self, _path: &Path) -> io::Result<Option<bool>> {
        Ok(Some(false))
    }

    fn write_flag(&self, _path: &Path, _excluded: bool) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

fn touch(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_size_of_regular_file() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "hello");

    assert_eq!(size(&file), Some(5));
}

#[test]
fn test_size_absent_for_missing_path() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(size(&tmp.path().join("missing")), None);
}

#[test]
fn test_modification_date_reads_mtime() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");
    filetime::set_file_mtime(&file, FileTime::from_unix_time(1_500_000_000, 0)).unwrap();

    let date = modification_date(&file);
    assert_eq!(date.timestamp(), 1_500_000_000);
    assert_eq!(read_modification_date(&file).unwrap().timestamp(), 1_500_000_000);
}

#[test]
fn test_modification_date_falls_back_to_now() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "vanishing.txt", "x");
    let before = Local::now();
    fs::remove_file(&file).unwrap();

    let date = modification_date(&file);
    assert!(date >= before);
    assert!(read_modification_date(&file).is_none());
}

#[test]
fn test_modification_date_or_uses_given_fallback() {
    let tmp = TempDir::new().unwrap();
    let fixed = Local.timestamp_opt(86_400, 0).unwrap();

    let date = modification_date_or(&tmp.path().join("missing"), || fixed);
    assert_eq!(date, fixed);
}

#[test]
fn test_backup_status_states() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");
    let store = MemoryStore::default();

    assert_eq!(backup_status_with(&store, &file), BackupStatus::Unknown);

    store.flags.lock().unwrap().insert(file.clone(), true);
    assert_eq!(backup_status_with(&store, &file), BackupStatus::Excluded);

    store.flags.lock().unwrap().insert(file.clone(), false);
    assert_eq!(backup_status_with(&store, &file), BackupStatus::Included);

    assert_eq!(backup_status_with(&UnsupportedStore, &file), BackupStatus::Failure);
}

#[test]
fn test_set_backup_excluded_round_trip() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");
    let store = MemoryStore::default();

    assert!(set_backup_excluded_with(&store, &file, true));
    assert_eq!(backup_status_with(&store, &file), BackupStatus::Excluded);

    assert!(set_backup_excluded_with(&store, &file, false));
    assert_eq!(backup_status_with(&store, &file), BackupStatus::Included);
}

#[test]
fn test_set_backup_excluded_without_flag_support_returns_false() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");

    assert!(!set_backup_excluded_with(&UnsupportedStore, &file, true));
}

#[test]
fn test_set_backup_excluded_read_failure_skips_write() {
    let tmp = TempDir::new().unwrap();
    let store = MemoryStore::default();

    assert!(!set_backup_excluded_with(&store, &tmp.path().join("missing"), true));
    assert_eq!(store.writes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_set_backup_excluded_write_failure_returns_false() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");

    assert!(!set_backup_excluded_with(&ReadOnlyStore, &file, true));
}

#[test]
fn test_platform_round_trip_when_supported() {
    let tmp = TempDir::new().unwrap();
    let file = touch(&tmp, "a.txt", "x");

    if !set_backup_excluded(&file, true) {
        // file system without user xattrs
        assert_ne!(backup_status(&file), BackupStatus::Excluded);
        return;
    }
    assert_eq!(backup_status(&file), BackupStatus::Excluded);
    assert!(set_backup_excluded(&file, false));
    assert_eq!(backup_status(&file), BackupStatus::Included);
}

#[test]
fn test_backup_status_on_missing_path_is_failure() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(backup_status(&tmp.path().join("missing")), BackupStatus::Failure);
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(None), "N/A");
    assert_eq!(format_size(Some(0)), "Zero KB");
    assert_eq!(format_size(Some(1)), "1 byte");
    assert_eq!(format_size(Some(512)), "512 bytes");
    assert_eq!(format_size(Some(1_000)), "1 KB");
    assert_eq!(format_size(Some(1_536)), "1.5 KB");
    assert_eq!(format_size(Some(999_960)), "1 MB");
    assert_eq!(format_size(Some(3_200_000_000)), "3.2 GB");
}

#[test]
fn test_snapshot_all_keeps_order() {
    let tmp = TempDir::new().unwrap();
    let items: Vec<FileItem> = (0..8)
        .map(|i| {
            let name = format!("f{i}.log");
            let path = touch(&tmp, &name, &"x".repeat(i));
            FileItem::new(name, path, FileType::Log)
        })
        .collect();
    let store = MemoryStore::default();

    let details = snapshot_all(&store, &items, false);
    assert_eq!(details.len(), 8);
    for (i, d) in details.iter().enumerate() {
        assert_eq!(d.item, items[i]);
        assert_eq!(d.size, Some(i as u64));
        assert_eq!(d.backup_status, None);
    }

    let with_status = snapshot_all(&store, &items, true);
    assert!(with_status
        .iter()
        .all(|d| d.backup_status == Some(BackupStatus::Unknown)));
}
