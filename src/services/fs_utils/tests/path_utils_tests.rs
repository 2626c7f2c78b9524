use super::*;

#[test]
fn test_display_title() {
    assert_eq!(display_title(Path::new("/var/mobile/Documents")), "Documents");
    assert_eq!(display_title(Path::new("/")), "/");
}

#[test]
fn test_stays_within() {
    assert!(stays_within(Path::new("Library/Caches")));
    assert!(stays_within(Path::new("a/../b")));
    assert!(stays_within(Path::new("./a")));
    assert!(!stays_within(Path::new("../outside")));
    assert!(!stays_within(Path::new("a/../../outside")));
    assert!(!stays_within(Path::new("/etc")));
}

#[test]
fn test_resolve_within() {
    let base = Path::new("/sandbox");
    assert_eq!(
        resolve_within(base, "Documents/db").unwrap(),
        PathBuf::from("/sandbox/Documents/db")
    );

    let err = resolve_within(base, "../etc").unwrap_err();
    assert!(matches!(err, BrowserError::InvalidArgument(_)));
}
