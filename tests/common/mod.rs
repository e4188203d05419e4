#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use budget_view::cli::{HOME_ENV, SCRIPT_ENV};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const SAMPLE_SNAPSHOT: &str = r#"{
    "Income": 1000,
    "Disposable_Income": 600,
    "Desired_Savings": 200,
    "Groceries": 100,
    "Transport": 0,
    "Eating_Out": 0,
    "Entertainment": 0,
    "Utilities": 0,
    "Healthcare": 0,
    "Education": 0,
    "Miscellaneous": 0
}"#;

/// Creates an isolated directory that survives until the test binary exits.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn write_snapshot(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("account.json");
    fs::write(&path, json).expect("write snapshot");
    path
}

/// The CLI binary in script mode with its config rooted at `home`.
pub fn script_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget_view_cli").expect("binary built");
    cmd.env(SCRIPT_ENV, "1")
        .env(HOME_ENV, home)
        .env("NO_COLOR", "1");
    cmd
}
