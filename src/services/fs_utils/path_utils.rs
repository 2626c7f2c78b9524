use std::path::{Component, Path, PathBuf};

use crate::types::errors::{BrowserError, BrowserResult};

/// Title shown for a browsing root: its last component, or the whole path for
/// roots such as `/`.
pub fn display_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Checks that `relative` stays inside whatever base it is joined onto.
/// Absolute paths and `..` components that climb above the base are rejected.
pub fn stays_within(relative: &Path) -> bool {
    let mut depth = 0i32;
    for component in relative.components() {
        match component {
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            Component::Normal(_) => {
                depth += 1;
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }

    true
}

/// Join a caller-supplied relative path onto `base`, refusing to escape it.
pub fn resolve_within(base: &Path, relative: &str) -> BrowserResult<PathBuf> {
    let target = Path::new(relative);
    if !stays_within(target) {
        return Err(BrowserError::InvalidArgument(format!(
            "Path escapes browsing root: {relative}"
        )));
    }

    Ok(base.join(target))
}

#[cfg(test)]
#[path = "tests/path_utils_tests.rs"]
mod tests;
