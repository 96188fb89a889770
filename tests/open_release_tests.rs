//! Kept in its own test binary with a single test: SQLite's allocation
//! counter is global to the process.

use rusqlite::ffi;
use sldatabase::Database;

fn sqlite_memory_used() -> i64 {
    unsafe { ffi::sqlite3_memory_used() }
}

#[test]
fn failed_open_releases_engine_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("test.sqlite");

    // First call initializes the library and its global state
    assert!(Database::open(&path).is_err());

    let before = sqlite_memory_used();
    for _ in 0..10 {
        let err = Database::open(&path).unwrap_err();
        assert_eq!(err.simple_code, ffi::SQLITE_CANTOPEN);
    }
    assert_eq!(sqlite_memory_used(), before);
}

