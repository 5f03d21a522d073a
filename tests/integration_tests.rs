use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_data_with_entries, ot, row_count, setup_test_data};

#[test]
fn test_add_and_list_all() {
    let data_path = setup_test_data("add_and_list_all");
    init_data_with_entries(&data_path);

    ot().args(["--data", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Ada Reyes"))
        .stdout(contains("Bo Lindqvist"));
}

#[test]
fn test_list_filter_month() {
    let data_path = setup_test_data("list_filter_month");
    init_data_with_entries(&data_path);

    // one extra entry outside September
    ot().args([
        "--data",
        &data_path,
        "add",
        "operations",
        "--date",
        "2025-10-03",
        "--id",
        "E300",
        "--name",
        "Cai Wen",
        "--designation",
        "Supervisor",
        "--hours",
        "2.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .success();

    ot().args(["--data", &data_path, "list", "--range", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Saved overtime entries for September 2025"))
        .stdout(contains("2025-10-03").not());
}

#[test]
fn test_list_filter_range_span() {
    let data_path = setup_test_data("list_filter_range_span");
    init_data_with_entries(&data_path);

    ot().args([
        "--data",
        &data_path,
        "list",
        "--range",
        "2025-09-01:2025-09-10",
    ])
    .assert()
    .success()
    .stdout(contains("2025-09-01"))
    .stdout(contains("2025-09-15").not());
}

#[test]
fn test_list_filter_department() {
    let data_path = setup_test_data("list_filter_department");
    init_data_with_entries(&data_path);

    ot().args(["--data", &data_path, "list", "--dept", "occ"])
        .assert()
        .success()
        .stdout(contains("Bo Lindqvist"))
        .stdout(contains("Ada Reyes").not());
}

#[test]
fn test_list_invalid_range() {
    let data_path = setup_test_data("list_invalid_range");
    init_data_with_entries(&data_path);

    ot().args(["--data", &data_path, "list", "--range", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_add_shapes_department_columns() {
    let data_path = setup_test_data("add_shapes_columns");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    ot().args([
        "--data",
        &data_path,
        "add",
        "training",
        "--date",
        "2025-09-05",
        "--id",
        "E400",
        "--name",
        "Dana Okafor",
        "--designation",
        "Trainer",
        "--hours",
        "2.5",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .success()
    .stdout(contains("Overtime entry added for Dana Okafor"));

    // the training column holds the hours, the other three are zero and
    // the total equals the submitted hours
    let content = fs::read_to_string(&data_path).expect("read data file");
    assert!(content.contains("0.0,0.0,2.5,0.0,M. Ferro,2.5"));
}

#[test]
fn test_add_missing_fields_is_rejected() {
    let data_path = setup_test_data("add_missing_fields");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    let rows_before = row_count(&data_path);

    // no name, no designation
    ot().args([
        "--data",
        &data_path,
        "add",
        "occ",
        "--date",
        "2025-09-05",
        "--id",
        "E500",
        "--hours",
        "1.5",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .failure()
    .stderr(contains("Missing required field(s)"))
    .stderr(contains("name"))
    .stderr(contains("designation"));

    // nothing was written
    assert_eq!(row_count(&data_path), rows_before);
}

#[test]
fn test_add_negative_hours_is_rejected() {
    let data_path = setup_test_data("add_negative_hours");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    ot().args([
        "--data",
        &data_path,
        "add",
        "scheduling",
        "--date",
        "2025-09-05",
        "--id",
        "E600",
        "--name",
        "Eli Navarro",
        "--designation",
        "Planner",
        "--hours=-1.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .failure()
    .stderr(contains("must be >= 0"));

    assert_eq!(row_count(&data_path), 0);
}

#[test]
fn test_add_invalid_department() {
    let data_path = setup_test_data("add_invalid_department");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    ot().args([
        "--data",
        &data_path,
        "add",
        "finance",
        "--date",
        "2025-09-05",
        "--id",
        "E700",
        "--name",
        "Fern Gale",
        "--designation",
        "Analyst",
        "--hours",
        "2.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid department code"));
}

#[test]
fn test_report_empty_store() {
    let data_path = setup_test_data("report_empty_store");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    ot().args(["--data", &data_path, "report"])
        .assert()
        .success()
        .stdout(contains("No data available yet."));
}

#[test]
fn test_report_dashboard_metrics() {
    let data_path = setup_test_data("report_dashboard_metrics");

    ot().args(["--data", &data_path, "--test", "init"])
        .assert()
        .success();

    // one employee, 3.0 h scheduling + 5.0 h operations on different days
    for (dept, date, hours) in [
        ("scheduling", "2025-09-01", "3.0"),
        ("operations", "2025-09-02", "5.0"),
    ] {
        ot().args([
            "--data",
            &data_path,
            "add",
            dept,
            "--date",
            date,
            "--id",
            "E100",
            "--name",
            "Ada Reyes",
            "--designation",
            "Dispatcher",
            "--hours",
            hours,
            "--approved-by",
            "M. Ferro",
        ])
        .assert()
        .success();
    }

    ot().args(["--data", &data_path, "report"])
        .assert()
        .success()
        .stdout(contains("Overtime Analysis Dashboard"))
        .stdout(contains("Total employees"))
        .stdout(contains("8.0"))
        .stdout(contains("Overtime Summary by Employee"))
        .stdout(contains("Overtime by Department"))
        .stdout(contains("Daily Overtime Trend"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"));
}

#[test]
fn test_report_range_excludes_other_months() {
    let data_path = setup_test_data("report_range_excludes");
    init_data_with_entries(&data_path);

    ot().args([
        "--data",
        &data_path,
        "add",
        "operations",
        "--date",
        "2025-10-03",
        "--id",
        "E300",
        "--name",
        "Cai Wen",
        "--designation",
        "Supervisor",
        "--hours",
        "2.0",
        "--approved-by",
        "M. Ferro",
    ])
    .assert()
    .success();

    ot().args(["--data", &data_path, "report", "--range", "2025-10"])
        .assert()
        .success()
        .stdout(contains("Cai Wen"))
        .stdout(contains("Ada Reyes").not());
}

#[test]
fn test_log_records_operations() {
    let data_path = setup_test_data("log_records_operations");
    init_data_with_entries(&data_path);

    ot().args(["--data", &data_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_info_shows_store_stats() {
    let data_path = setup_test_data("info_shows_store_stats");
    init_data_with_entries(&data_path);

    ot().args(["--data", &data_path, "info"])
        .assert()
        .success()
        .stdout(contains("Total records"))
        .stdout(contains("2"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_backup_creates_copy() {
    let data_path = setup_test_data("backup_creates_copy");
    init_data_with_entries(&data_path);

    let out = common::temp_out("backup_creates_copy", "csv");

    ot().args(["--data", &data_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let original = fs::read_to_string(&data_path).expect("read original");
    let copy = fs::read_to_string(&out).expect("read backup");
    assert_eq!(original, copy);
}
