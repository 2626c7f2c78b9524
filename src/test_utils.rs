use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Create `entries` under `root`. Names ending in `/` become directories,
/// everything else an empty file (parents created as needed).
pub fn write_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).expect("Failed to create fixture directory");
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create fixture parent");
            }
            fs::write(&path, b"").expect("Failed to write fixture file");
        }
    }
}
