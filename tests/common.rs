#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ot() -> Command {
    cargo_bin_cmd!("ottracker")
}

/// Create a unique test data file path inside the system temp dir and
/// remove any existing file (plus its sidecar audit log)
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ottracker.csv", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data file and add a small dataset useful for many tests
pub fn init_data_with_entries(data_path: &str) {
    // init (creates the header-only data file)
    ot().args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    // a couple of entries via CLI, two employees, two departments
    ot().args([
        "--data",
        data_path,
        "add",
        "scheduling",
        "--date",
        "2025-09-01",
        "--id",
        "E100",
        "--name",
        "Ada Reyes",
        "--designation",
        "Dispatcher",
        "--hours",
        "3.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .success();

    ot().args([
        "--data",
        data_path,
        "add",
        "occ",
        "--date",
        "2025-09-15",
        "--id",
        "E200",
        "--name",
        "Bo Lindqvist",
        "--designation",
        "Controller",
        "--hours",
        "5.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .success();
}

/// Number of data rows currently persisted (header excluded)
pub fn row_count(data_path: &str) -> usize {
    let content = fs::read_to_string(data_path).expect("read data file");
    content.lines().filter(|l| !l.trim().is_empty()).count() - 1
}
