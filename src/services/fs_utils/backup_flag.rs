//! Platform storage for the per-file "excluded from backup" flag.
//!
//! The flag lives in an extended attribute. macOS uses the attribute Time
//! Machine reads; other Unix systems use a namespaced `user.` attribute, which
//! needs a file system mounted with user xattr support. Everything else
//! reports `Unsupported`.
//!
//! Re-including a file writes `"0"` rather than removing the attribute, so a
//! cleared flag still reads back as included instead of unknown. On macOS the
//! attribute therefore stays present after re-inclusion; Time Machine keys on
//! its presence, so a file toggled back in is still skipped by Time Machine
//! until the attribute is removed by other means.

use std::io;
use std::path::Path;

#[cfg(target_os = "macos")]
pub const BACKUP_EXCLUDE_ATTR: &str = "com.apple.metadata:com_apple_backup_excludeItem";
#[cfg(not(target_os = "macos"))]
pub const BACKUP_EXCLUDE_ATTR: &str = "user.sandbox_browser.backup_exclude";

/// Read/write access to the backup-exclusion flag of a single path.
///
/// `read_flag` returns `Ok(None)` when the attribute can be queried but is not
/// set; any other failure is an `Err`.
pub trait BackupFlagStore: Send + Sync {
    fn read_flag(&self, path: &Path) -> io::Result<Option<bool>>;
    fn write_flag(&self, path: &Path, excluded: bool) -> io::Result<()>;
}

/// Default store backed by extended attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct XattrFlagStore;

impl XattrFlagStore {
    /// Whether this platform can carry the flag at all.
    pub fn is_supported() -> bool {
        xattr::SUPPORTED_PLATFORM
    }
}

impl BackupFlagStore for XattrFlagStore {
    fn read_flag(&self, path: &Path) -> io::Result<Option<bool>> {
        Ok(xattr::get(path, BACKUP_EXCLUDE_ATTR)?.map(|value| decode_flag(&value)))
    }

    fn write_flag(&self, path: &Path, excluded: bool) -> io::Result<()> {
        xattr::set(path, BACKUP_EXCLUDE_ATTR, encode_flag(excluded))
    }
}

/// `"0"`, `"false"` and empty values mean included; any other payload is
/// treated as a set exclusion marker.
pub fn decode_flag(value: &[u8]) -> bool {
    let text = String::from_utf8_lossy(value);
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    !(text.is_empty() || text == "0" || text.eq_ignore_ascii_case("false"))
}

pub fn encode_flag(excluded: bool) -> &'static [u8] {
    if excluded {
        b"1"
    } else {
        b"0"
    }
}

#[cfg(test)]
#[path = "tests/backup_flag_tests.rs"]
mod tests;
