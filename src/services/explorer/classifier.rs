//! Entry classification for directory listings.
//!
//! Directories always classify as [`FileType::Directory`]. Everything else is
//! typed by its lowercased extension, with SQLite variants (`.sqlite`,
//! `.sqlite3`, `.sqlite-wal`, `.db`, ...) folded into [`FileType::Sqlite`].

use std::path::Path;

use crate::services::explorer::types::FileType;

/// Lowercase an extension and fold SQLite spellings into `"sqlite"`.
pub fn normalize_extension(extension: &str) -> String {
    let lowered = extension.to_lowercase();
    if lowered.starts_with("sqlite") || lowered == "db" {
        "sqlite".to_string()
    } else {
        lowered
    }
}

/// Map a (possibly unnormalized) extension to a file type. Unknown → `File`.
pub fn file_type_for_extension(extension: &str) -> FileType {
    match normalize_extension(extension).as_str() {
        "gif" => FileType::Gif,
        "jpg" => FileType::Jpg,
        "jpeg" => FileType::Jpeg,
        "png" => FileType::Png,
        "json" => FileType::Json,
        "pdf" => FileType::Pdf,
        "plist" => FileType::Plist,
        "sqlite" => FileType::Sqlite,
        "log" => FileType::Log,
        // "directory" and "file" are not extensions a name can opt into
        _ => FileType::File,
    }
}

/// Classify a path on disk. The directory check follows symlinks.
pub fn classify_path(path: &Path) -> FileType {
    if path.is_dir() {
        return FileType::Directory;
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    file_type_for_extension(&extension)
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
