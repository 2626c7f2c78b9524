use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::services::explorer::classifier::classify_path;
use crate::services::explorer::types::{FileItem, ListingOrder};
use crate::types::errors::{BrowserError, BrowserResult};

/// Names starting with a dot are never listed.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Builds a `FileItem` for an entry path. Returns `None` for hidden names.
///
/// `path` is kept as found on disk; only the display `name` is lossily
/// converted.
pub fn build_file_item(path: PathBuf) -> Option<FileItem> {
    let name = path.file_name()?.to_string_lossy().to_string();
    if is_hidden(&name) {
        return None;
    }

    let file_type = classify_path(&path);
    Some(FileItem {
        name,
        path,
        file_type,
    })
}

/// Read the immediate children of `path`, skipping hidden entries.
///
/// Unlike [`list_directory`] this reports an unreadable path as an error, so
/// callers can tell it apart from an empty directory.
pub fn scan_directory(path: &Path) -> BrowserResult<Vec<FileItem>> {
    let entries = fs::read_dir(path).map_err(|source| BrowserError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut items = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        if let Some(item) = build_file_item(entry.path()) {
            items.push(item);
        }
    }

    Ok(items)
}

/// Read the immediate children of `path` in enumeration order.
/// An unreadable path yields an empty listing.
pub fn list_directory(path: &Path) -> Vec<FileItem> {
    match scan_directory(path) {
        Ok(items) => items,
        Err(e) => {
            log::debug!("Could not list directory: {e}");
            Vec::new()
        }
    }
}

pub fn list_ordered(path: &Path, order: ListingOrder) -> Vec<FileItem> {
    let mut items = list_directory(path);
    sort_items(&mut items, order);
    log::info!(
        "Listed {} entries from {} ({:?})",
        items.len(),
        path.display(),
        order
    );
    items
}

pub fn sort_items(items: &mut [FileItem], order: ListingOrder) {
    match order {
        ListingOrder::FileSystem => {}
        ListingOrder::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
        ListingOrder::NameCaseInsensitive => items.sort_by(compare_name_ci),
        ListingOrder::DirectoriesFirst => items.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| compare_name_ci(a, b))
        }),
    }
}

fn compare_name_ci(a: &FileItem, b: &FileItem) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Recursively list every visible descendant of `root` up to `max_depth`
/// levels. Hidden directories are not descended into. Symlinks are not followed.
pub fn scan_tree(root: &Path, max_depth: usize) -> Vec<FileItem> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !is_hidden(&entry.file_name().to_string_lossy())
        });

    let mut items = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry under {}: {e}", root.display());
                continue;
            }
        };
        if let Some(item) = build_file_item(entry.into_path()) {
            items.push(item);
        }
    }

    items
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
