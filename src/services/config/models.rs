use serde::{Deserialize, Serialize};

use crate::services::explorer::types::ListingOrder;

/// Display options for a browsing session.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BrowserSettings {
    /// Prefix each row with the backup status glyph and allow toggling it.
    /// Reading the flag costs an extra syscall per row.
    pub show_backup_status: bool,
    /// Append the file size to each row.
    pub show_file_size: bool,
    pub order: ListingOrder,
}
