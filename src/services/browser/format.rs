//! Row text for a listed entry.

use chrono::{DateTime, Local};

use crate::services::config::BrowserSettings;
use crate::services::explorer::metadata::format_size;
use crate::services::explorer::types::ItemDetails;

/// Separates the backup glyph from the rest of the row.
const THIN_SPACE: char = '\u{2009}';

/// Medium date and time, e.g. `Oct 19, 2026 at 9:06:00 AM`.
pub fn format_date(date: &DateTime<Local>) -> String {
    date.format("%b %-d, %Y at %-I:%M:%S %p").to_string()
}

/// Secondary line of a row: date, then size and backup glyph when enabled.
pub fn detail_text(details: &ItemDetails, settings: &BrowserSettings) -> String {
    let mut text = format_date(&details.modification_date);

    if settings.show_file_size {
        text.push_str(" | ");
        text.push_str(&format_size(details.size));
    }

    if settings.show_backup_status {
        if let Some(status) = details.backup_status {
            text = format!("{}{THIN_SPACE}{text}", status.glyph());
        }
    }

    text
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
