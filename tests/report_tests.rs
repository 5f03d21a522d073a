//! Library-level tests for the report builder aggregations.

use chrono::NaiveDate;
use ottracker::core::intake::{EntryForm, IntakeLogic};
use ottracker::core::report::ReportLogic;
use ottracker::models::department::Department;
use ottracker::models::record::OvertimeRecord;
use ottracker::models::status::Status;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Build a shaped record the way intake does, for a given department.
fn record(
    day: &str,
    id: &str,
    name: &str,
    designation: &str,
    dept: Department,
    hours: f64,
) -> OvertimeRecord {
    IntakeLogic::shape(
        dept,
        EntryForm {
            date: date(day),
            employee_id: id.to_string(),
            employee_name: name.to_string(),
            designation: designation.to_string(),
            status: Status::Active,
            hours,
            approved_by: "M. Ferro".to_string(),
        },
    )
}

#[test]
fn summary_metrics_empty_collection_is_none() {
    assert!(ReportLogic::summary_metrics(&[]).is_none());
    assert!(ReportLogic::employee_department_summary(&[]).is_none());
    assert!(ReportLogic::department_comparison_series(&[]).is_none());
    assert!(ReportLogic::daily_trend_series(&[]).is_none());
}

#[test]
fn summary_metrics_single_employee_two_departments() {
    let records = vec![
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 3.0),
        record("2025-09-02", "E100", "Ada Reyes", "Dispatcher", Department::Operations, 5.0),
    ];

    let metrics = ReportLogic::summary_metrics(&records).expect("metrics");
    assert_eq!(metrics.total_employees, 1);
    assert_eq!(metrics.total_hours, 8.0);
    assert_eq!(metrics.avg_hours_per_employee, 8.0);
    assert_eq!(metrics.department_count, 4);
}

#[test]
fn summary_metrics_averages_over_distinct_employees() {
    let records = vec![
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 2.0),
        record("2025-09-01", "E200", "Bo Lindqvist", "Controller", Department::Occ, 4.0),
        record("2025-09-02", "E200", "Bo Lindqvist", "Controller", Department::Occ, 6.0),
    ];

    let metrics = ReportLogic::summary_metrics(&records).expect("metrics");
    assert_eq!(metrics.total_employees, 2);
    assert_eq!(metrics.total_hours, 12.0);
    // (2.0 + 10.0) / 2
    assert_eq!(metrics.avg_hours_per_employee, 6.0);
}

#[test]
fn employee_summary_groups_by_name_and_designation() {
    let records = vec![
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 3.0),
        record("2025-09-02", "E100", "Ada Reyes", "Dispatcher", Department::Occ, 1.5),
        record("2025-09-02", "E200", "Bo Lindqvist", "Controller", Department::Occ, 4.0),
    ];

    let rows = ReportLogic::employee_department_summary(&records).expect("rows");
    assert_eq!(rows.len(), 2);

    let ada = rows.iter().find(|r| r.name == "Ada Reyes").expect("ada row");
    assert_eq!(ada.designation, "Dispatcher");
    assert_eq!(ada.scheduling_ot, 3.0);
    assert_eq!(ada.occ_ot, 1.5);
    assert_eq!(ada.training_ot, 0.0);
    assert_eq!(ada.ops_ot, 0.0);
    assert_eq!(ada.total_ot, 4.5);
}

#[test]
fn department_series_aligns_values_to_employee_axis() {
    let records = vec![
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 3.0),
        record("2025-09-02", "E200", "Bo Lindqvist", "Controller", Department::Occ, 4.0),
        record("2025-09-03", "E200", "Bo Lindqvist", "Controller", Department::Occ, 1.0),
    ];

    let series = ReportLogic::department_comparison_series(&records).expect("series");
    assert_eq!(series.employees, vec!["Ada Reyes", "Bo Lindqvist"]);
    assert_eq!(series.series.len(), 4);

    let (_, occ_values) = series
        .series
        .iter()
        .find(|(d, _)| *d == Department::Occ)
        .expect("occ series");
    assert_eq!(occ_values, &vec![0.0, 5.0]);

    let (_, sched_values) = series
        .series
        .iter()
        .find(|(d, _)| *d == Department::Scheduling)
        .expect("scheduling series");
    assert_eq!(sched_values, &vec![3.0, 0.0]);
}

#[test]
fn daily_trend_is_ordered_ascending() {
    let records = vec![
        record("2025-09-02", "E200", "Bo Lindqvist", "Controller", Department::Occ, 6.0),
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 4.0),
    ];

    let points = ReportLogic::daily_trend_series(&records).expect("points");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, date("2025-09-01"));
    assert_eq!(points[0].total_ot, 4.0);
    assert_eq!(points[1].date, date("2025-09-02"));
    assert_eq!(points[1].total_ot, 6.0);
}

#[test]
fn daily_trend_sums_same_day_entries() {
    let records = vec![
        record("2025-09-01", "E100", "Ada Reyes", "Dispatcher", Department::Scheduling, 1.5),
        record("2025-09-01", "E200", "Bo Lindqvist", "Controller", Department::Occ, 2.5),
    ];

    let points = ReportLogic::daily_trend_series(&records).expect("points");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].total_ot, 4.0);
}
