use rusqlite::ffi;
use sldatabase::{Database, OpenOptions};
use tempfile::TempDir;

fn temp_db() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.sqlite");
    (dir, path)
}

#[test]
fn open_writable_path_has_clean_state() {
    let (_dir, path) = temp_db();
    let db = Database::open(&path).unwrap();

    assert_eq!(db.simple_error_code(), 0);
    assert_eq!(db.extended_error_code(), 0);
    assert!(db.error_message().is_none());
    assert_eq!(db.path(), path.to_string_lossy());
    assert!(path.exists());
}

#[test]
fn open_in_missing_directory_fails() {
    let (dir, _) = temp_db();
    let path = dir.path().join("missing").join("test.sqlite");

    let err = Database::open(&path).unwrap_err();
    assert_eq!(err.simple_code, ffi::SQLITE_CANTOPEN);
    assert_ne!(err.extended_code, 0);
    assert_eq!(err.path, path.to_string_lossy());
    assert!(!path.exists());
}

#[test]
fn open_without_create_fails_for_missing_file() {
    let (_dir, path) = temp_db();
    let err = Database::open_with(&path, &OpenOptions::new().create(false)).unwrap_err();
    assert_eq!(err.simple_code, ffi::SQLITE_CANTOPEN);
    assert!(!path.exists());
}

#[test]
fn create_insert_then_last_row_id() {
    let (_dir, path) = temp_db();
    let mut db = Database::open(&path).unwrap();

    assert!(db.execute("CREATE TABLE t(id INTEGER PRIMARY KEY, v TEXT)"));
    assert!(db.execute("INSERT INTO t(v) VALUES('x')"));
    assert_eq!(db.last_inserted_row_id(), 1);
}

#[test]
fn invalid_sql_then_valid_sql_resets_codes() {
    let (_dir, path) = temp_db();
    let mut db = Database::open(&path).unwrap();

    assert!(!db.execute("THIS IS NOT SQL"));
    assert_ne!(db.simple_error_code(), 0);
    assert!(db.error_message().is_some());

    assert!(db.execute("CREATE TABLE t(id INTEGER)"));
    assert_eq!(db.simple_error_code(), 0);
    assert_eq!(db.extended_error_code(), 0);
    assert!(db.error_message().is_none());
}

#[test]
fn data_survives_close_and_reopen() {
    let (_dir, path) = temp_db();
    {
        let mut db = Database::open(&path).unwrap();
        assert!(db.execute("CREATE TABLE t(id INTEGER PRIMARY KEY, v TEXT)"));
        assert!(db.execute("INSERT INTO t(v) VALUES('kept')"));
        db.close().map_err(|(_, e)| e).unwrap();
    }

    let mut db = Database::open(&path).unwrap();
    let mut stmt = db.prepare("SELECT v FROM t").unwrap();
    let rows = stmt.query().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], rusqlite::types::Value::Text("kept".into()));
}

#[test]
fn dropped_handle_releases_the_file_lock() {
    let (_dir, path) = temp_db();
    {
        let mut db = Database::open(&path).unwrap();
        assert!(db.execute("CREATE TABLE t(id INTEGER); BEGIN EXCLUSIVE; INSERT INTO t VALUES(1);"));
        // Dropped mid-transaction: closing rolls back and unlocks
    }

    let mut other = Database::open_with(
        &path,
        &OpenOptions::new().busy_timeout(std::time::Duration::from_millis(100)),
    )
    .unwrap();
    assert!(other.execute("INSERT INTO t VALUES(2)"));
    let count: i64 = other
        .connection()
        .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn read_only_handle_rejects_writes() {
    let (_dir, path) = temp_db();
    {
        let mut db = Database::open(&path).unwrap();
        assert!(db.execute("CREATE TABLE t(id INTEGER)"));
    }

    let mut ro = Database::open_with(&path, &OpenOptions::new().read_only(true)).unwrap();
    assert!(!ro.execute("INSERT INTO t VALUES(1)"));
    assert_eq!(ro.simple_error_code(), ffi::SQLITE_READONLY);
}

#[test]
fn second_writer_sees_busy() {
    let (_dir, path) = temp_db();
    let mut first = Database::open(&path).unwrap();
    assert!(first.execute("CREATE TABLE t(id INTEGER); BEGIN EXCLUSIVE;"));

    let mut second = Database::open_with(
        &path,
        &OpenOptions::new().busy_timeout(std::time::Duration::from_millis(50)),
    )
    .unwrap();
    assert!(!second.execute("INSERT INTO t VALUES(1)"));
    assert_eq!(second.simple_error_code(), ffi::SQLITE_BUSY);

    assert!(first.execute("COMMIT"));
    assert!(second.execute("INSERT INTO t VALUES(1)"));
    assert!(second.succeeded());
}
