#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sldb() -> Command {
    cargo_bin_cmd!("sldb")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sldb.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// A path whose parent directory does not exist, so SQLite cannot create it
pub fn unopenable_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sldb_missing_dir", name));
    fs::remove_dir_all(&path).ok();
    path.push("db.sqlite");
    path.to_string_lossy().to_string()
}

/// Initialize a DB with a small `items` table through the CLI
pub fn init_db_with_table(db_path: &str) {
    sldb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    sldb()
        .args([
            "--db",
            db_path,
            "exec",
            "CREATE TABLE items(id INTEGER PRIMARY KEY, name TEXT UNIQUE)",
        ])
        .assert()
        .success();
}
