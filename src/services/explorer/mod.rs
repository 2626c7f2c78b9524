//! Directory listing, entry classification and live entry metadata.

pub mod classifier;
pub mod listing;
pub mod metadata;
pub mod types;

pub use listing::{list_directory, list_ordered, scan_directory, scan_tree};
pub use types::{BackupStatus, FileItem, FileType, IconCategory, ItemDetails, ListingOrder};
