use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::services::explorer::metadata;

// ── Classification ────────────────────────────────────────────────────────────

/// Type of a listed entry, fixed when the entry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Directory,
    Gif,
    Jpg,
    Jpeg,
    Png,
    Json,
    Pdf,
    Plist,
    File,
    Sqlite,
    Log,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Json => "json",
            Self::Pdf => "pdf",
            Self::Plist => "plist",
            Self::File => "file",
            Self::Sqlite => "sqlite",
            Self::Log => "log",
        }
    }

    /// Icon bucket used when rendering a row.
    pub fn icon(&self) -> IconCategory {
        match self {
            Self::Directory => IconCategory::Directory,
            Self::Jpg | Self::Pdf | Self::Gif | Self::Jpeg => IconCategory::Image,
            Self::Plist => IconCategory::Plist,
            Self::Sqlite => IconCategory::Sqlite,
            Self::Log => IconCategory::Log,
            _ => IconCategory::File,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Directory,
    Image,
    Plist,
    Sqlite,
    Log,
    File,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Image => "image",
            Self::Plist => "plist",
            Self::Sqlite => "sqlite",
            Self::Log => "log",
            Self::File => "file",
        }
    }
}

/// Backup-exclusion state of a file, read live from the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupStatus {
    Excluded,
    Included,
    /// Reading the flag raised an error.
    Failure,
    /// The flag could be read but is not set.
    Unknown,
}

impl BackupStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Excluded => "∅",
            Self::Included => "✪",
            Self::Failure => "⧮",
            Self::Unknown => "⍰",
        }
    }
}

/// Ordering applied to a listing after enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrder {
    /// Whatever order the directory enumeration yields.
    #[default]
    FileSystem,
    /// Byte-wise lexicographic by name.
    Name,
    NameCaseInsensitive,
    /// Directories first, each group case-insensitive by name.
    DirectoriesFirst,
}

// ── Entries ───────────────────────────────────────────────────────────────────

/// One entry found by a directory listing.
///
/// Only `name`, `path` and `file_type` are stored. Everything else is re-read
/// from disk on each call, so two calls on the same value may disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileItem {
    /// Last path component
    pub name: String,
    /// Full path (root joined with `name`)
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl FileItem {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            file_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }

    pub fn icon(&self) -> IconCategory {
        self.file_type.icon()
    }

    pub fn modification_date(&self) -> DateTime<Local> {
        metadata::modification_date(&self.path)
    }

    pub fn size(&self) -> Option<u64> {
        metadata::size(&self.path)
    }

    pub fn backup_status(&self) -> BackupStatus {
        metadata::backup_status(&self.path)
    }

    pub fn set_backup_excluded(&self, excluded: bool) -> bool {
        metadata::set_backup_excluded(&self.path, excluded)
    }
}

/// Derived attributes of a [`FileItem`] captured at one instant for display.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetails {
    pub item: FileItem,
    pub modification_date: DateTime<Local>,
    pub size: Option<u64>,
    /// `None` when backup status was not requested
    pub backup_status: Option<BackupStatus>,
}
