use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Sandbox layout used across the integration tests:
///
/// ```text
/// root/
///   a.txt
///   .hidden
///   sub/
///   backup.sqlite3
/// ```
pub fn sandbox_fixture(root: &Path) {
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join(".hidden"), "").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("backup.sqlite3"), "").unwrap();
}
