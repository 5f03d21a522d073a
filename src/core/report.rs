//! Report builder: pure aggregations over the loaded record set.
//!
//! Every producer returns `Option` — `None` means "no data yet" and is kept
//! distinct from a true zero-valued result so the rendering layer stays
//! honest about data availability.

use crate::models::department::Department;
use crate::models::record::OvertimeRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Scalar dashboard metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetrics {
    pub total_employees: usize,
    pub total_hours: f64,
    pub avg_hours_per_employee: f64,
    pub department_count: usize,
}

/// One row of the per-employee department summary.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSummaryRow {
    pub name: String,
    pub designation: String,
    pub scheduling_ot: f64,
    pub occ_ot: f64,
    pub training_ot: f64,
    pub ops_ot: f64,
    pub total_ot: f64,
}

/// Chart-ready grouped series: one value per (employee, department),
/// aligned to the `employees` axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSeries {
    pub employees: Vec<String>,
    pub series: Vec<(Department, Vec<f64>)>,
}

/// One point of the daily trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_ot: f64,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Dashboard scalars: distinct employees, total hours, mean of the
    /// per-employee hour sums, tracked department count (fixed at 4).
    pub fn summary_metrics(records: &[OvertimeRecord]) -> Option<SummaryMetrics> {
        if records.is_empty() {
            return None;
        }

        let mut per_employee: BTreeMap<&str, f64> = BTreeMap::new();
        let mut total_hours = 0.0;

        for r in records {
            *per_employee.entry(r.employee_id.as_str()).or_insert(0.0) += r.total_ot;
            total_hours += r.total_ot;
        }

        let total_employees = per_employee.len();
        let avg_hours_per_employee = total_hours / total_employees as f64;

        Some(SummaryMetrics {
            total_employees,
            total_hours,
            avg_hours_per_employee,
            department_count: Department::ALL.len(),
        })
    }

    /// Group by (name, designation), summing every hour column.
    /// Rows come out sorted by the grouping key.
    pub fn employee_department_summary(
        records: &[OvertimeRecord],
    ) -> Option<Vec<EmployeeSummaryRow>> {
        if records.is_empty() {
            return None;
        }

        let mut groups: BTreeMap<(String, String), EmployeeSummaryRow> = BTreeMap::new();

        for r in records {
            let row = groups
                .entry((r.employee_name.clone(), r.designation.clone()))
                .or_insert_with(|| EmployeeSummaryRow {
                    name: r.employee_name.clone(),
                    designation: r.designation.clone(),
                    scheduling_ot: 0.0,
                    occ_ot: 0.0,
                    training_ot: 0.0,
                    ops_ot: 0.0,
                    total_ot: 0.0,
                });

            row.scheduling_ot += r.scheduling_ot;
            row.occ_ot += r.occ_ot;
            row.training_ot += r.training_ot;
            row.ops_ot += r.ops_ot;
            row.total_ot += r.total_ot;
        }

        Some(groups.into_values().collect())
    }

    /// Per-department series over the employee-name axis, for the grouped
    /// bar comparison.
    pub fn department_comparison_series(records: &[OvertimeRecord]) -> Option<DepartmentSeries> {
        if records.is_empty() {
            return None;
        }

        let employees: Vec<String> = records
            .iter()
            .map(|r| r.employee_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let series = Department::ALL
            .into_iter()
            .map(|dept| {
                let values = employees
                    .iter()
                    .map(|name| {
                        records
                            .iter()
                            .filter(|r| &r.employee_name == name)
                            .map(|r| r.hours_for(dept))
                            .sum()
                    })
                    .collect();
                (dept, values)
            })
            .collect();

        Some(DepartmentSeries { employees, series })
    }

    /// Total hours per calendar day, ascending by date.
    pub fn daily_trend_series(records: &[OvertimeRecord]) -> Option<Vec<TrendPoint>> {
        if records.is_empty() {
            return None;
        }

        let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for r in records {
            *per_day.entry(r.date).or_insert(0.0) += r.total_ot;
        }

        Some(
            per_day
                .into_iter()
                .map(|(date, total_ot)| TrendPoint { date, total_ot })
                .collect(),
        )
    }
}
