mod common;
use common::{init_data_with_entries, ot, setup_test_data, temp_out};
use std::fs;

#[test]
fn test_export_csv_all() {
    let data_path = setup_test_data("export_csv_all");
    init_data_with_entries(&data_path);

    let out = temp_out("export_csv_all", "csv");

    ot().args([
        "--data", &data_path, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("2025-09-15"));
    assert!(content.contains("Ada Reyes"));
}

#[test]
fn test_export_json_range() {
    let data_path = setup_test_data("export_json_range");
    init_data_with_entries(&data_path);

    let out = temp_out("export_json_range", "json");

    ot().args([
        "--data",
        &data_path,
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2025-09-01:2025-09-10",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-09-15"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let data_path = setup_test_data("export_xlsx_creates_file");
    init_data_with_entries(&data_path);

    let out = temp_out("export_xlsx_creates_file", "xlsx");

    ot().args([
        "--data", &data_path, "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_relative_path_is_rejected() {
    let data_path = setup_test_data("export_relative_path");
    init_data_with_entries(&data_path);

    ot().args([
        "--data",
        &data_path,
        "export",
        "--format",
        "csv",
        "--file",
        "relative_out.csv",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing() {
    let data_path = setup_test_data("export_force_overwrites");
    init_data_with_entries(&data_path);

    let out = temp_out("export_force_overwrites", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    ot().args([
        "--data", &data_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("stale"));
}
