//! Browsing context over one directory of the sandbox.
//!
//! A session owns the current listing of its root and hands out child
//! sessions for subdirectories. Selecting a file fires the selection handler;
//! the UI layer decides what to do with it. Listings are rebuilt on
//! [`BrowserSession::refresh`], never patched in place.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::services::browser::format::detail_text;
use crate::services::config::BrowserSettings;
use crate::services::core::PathLocks;
use crate::services::explorer::listing::list_ordered;
use crate::services::explorer::metadata::{
    backup_status_with, set_backup_excluded_with, snapshot, snapshot_all,
};
use crate::services::explorer::types::{BackupStatus, FileItem, ItemDetails};
use crate::services::fs_utils::backup_flag::{BackupFlagStore, XattrFlagStore};
use crate::services::fs_utils::path_utils::{display_title, resolve_within};
use crate::types::errors::{BrowserError, BrowserResult};

/// Called with the selected entry when a non-directory entry is opened.
pub type SelectionHandler = Arc<dyn Fn(&FileItem) + Send + Sync>;

/// Result of opening an entry.
#[derive(Debug)]
pub enum Navigation {
    /// A new session rooted at the opened subdirectory.
    Directory(BrowserSession),
    /// A file was selected; the selection handler has already run.
    FileSelected(FileItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Applied { excluded: bool },
    Failed,
    /// Backup display is off, or the index is out of range.
    Unavailable,
}

pub struct BrowserSession {
    root: PathBuf,
    settings: BrowserSettings,
    items: Vec<FileItem>,
    on_select: Option<SelectionHandler>,
    store: Arc<dyn BackupFlagStore>,
    locks: Arc<PathLocks>,
}

impl fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserSession")
            .field("root", &self.root)
            .field("settings", &self.settings)
            .field("items", &self.items.len())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl BrowserSession {
    pub fn new(root: impl Into<PathBuf>, settings: BrowserSettings) -> Self {
        Self::with_store(root, settings, Arc::new(XattrFlagStore))
    }

    /// Session whose backup flags go through `store` instead of xattrs.
    pub fn with_store(
        root: impl Into<PathBuf>,
        settings: BrowserSettings,
        store: Arc<dyn BackupFlagStore>,
    ) -> Self {
        let mut session = Self {
            root: root.into(),
            settings,
            items: Vec::new(),
            on_select: None,
            store,
            locks: Arc::new(PathLocks::new()),
        };
        session.refresh();
        session
    }

    /// Session rooted at the current user's home directory.
    pub fn home(settings: BrowserSettings) -> BrowserResult<Self> {
        let home = dirs::home_dir().ok_or(BrowserError::NoHomeDirectory)?;
        Ok(Self::new(home, settings))
    }

    pub fn set_selection_handler<F>(&mut self, handler: F)
    where
        F: Fn(&FileItem) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(handler));
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn title(&self) -> String {
        display_title(&self.root)
    }

    pub fn settings(&self) -> &BrowserSettings {
        &self.settings
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&FileItem> {
        self.items.get(index)
    }

    /// Re-read the root directory. An unreadable root leaves the listing empty.
    pub fn refresh(&mut self) {
        self.items = list_ordered(&self.root, self.settings.order);
    }

    /// Open the entry at `index`. `None` when the index is out of range.
    pub fn open(&self, index: usize) -> Option<Navigation> {
        let item = self.items.get(index)?;

        if item.is_directory() {
            return Some(Navigation::Directory(self.child(item.path.clone())));
        }

        if let Some(handler) = &self.on_select {
            handler(item);
        }
        Some(Navigation::FileSelected(item.clone()))
    }

    /// Open a directory given relative to this session's root.
    pub fn open_path(&self, relative: &str) -> BrowserResult<BrowserSession> {
        let target = resolve_within(&self.root, relative)?;
        if !target.is_dir() {
            return Err(BrowserError::InvalidArgument(format!(
                "Not a directory: {}",
                target.display()
            )));
        }
        Ok(self.child(target))
    }

    fn child(&self, root: PathBuf) -> BrowserSession {
        let mut child = Self {
            root,
            settings: self.settings.clone(),
            items: Vec::new(),
            on_select: self.on_select.clone(),
            store: Arc::clone(&self.store),
            locks: Arc::clone(&self.locks),
        };
        child.refresh();
        child
    }

    /// Path to hand to a share sheet. Directories cannot be shared.
    pub fn share_target(&self, index: usize) -> Option<&Path> {
        self.items
            .get(index)
            .filter(|item| !item.is_directory())
            .map(|item| item.path.as_path())
    }

    pub fn backup_status(&self, index: usize) -> Option<BackupStatus> {
        let item = self.items.get(index)?;
        Some(backup_status_with(&*self.store, &item.path))
    }

    /// Flip the backup flag of the entry at `index`.
    ///
    /// An `Included` entry becomes excluded; anything else (including
    /// `Unknown` and `Failure`) is put back into the backup.
    pub fn toggle_backup(&self, index: usize) -> ToggleOutcome {
        if !self.settings.show_backup_status {
            return ToggleOutcome::Unavailable;
        }
        let Some(item) = self.items.get(index) else {
            return ToggleOutcome::Unavailable;
        };

        let _guard = self.locks.acquire(&item.path);
        let currently_excluded =
            backup_status_with(&*self.store, &item.path) != BackupStatus::Included;
        let excluded = !currently_excluded;

        if set_backup_excluded_with(&*self.store, &item.path, excluded) {
            ToggleOutcome::Applied { excluded }
        } else {
            log::warn!("Backup toggle failed for {}", item.path.display());
            ToggleOutcome::Failed
        }
    }

    pub fn details(&self, index: usize) -> Option<ItemDetails> {
        let item = self.items.get(index)?;
        Some(snapshot(&*self.store, item, self.settings.show_backup_status))
    }

    /// Details for every entry, read in parallel.
    pub fn details_all(&self) -> Vec<ItemDetails> {
        snapshot_all(&*self.store, &self.items, self.settings.show_backup_status)
    }

    pub fn detail_text(&self, index: usize) -> Option<String> {
        self.details(index).map(|details| detail_text(&details, &self.settings))
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
