use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{DepartmentSeries, EmployeeSummaryRow, ReportLogic, TrendPoint};
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::ui::messages::{header, info};
use crate::utils::chart;
use crate::utils::colors::{CYAN, GREEN, RESET, color_for_department, colorize_hours};
use crate::utils::date::parse_range;
use crate::utils::formatting::{bold, fmt_hours};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { range } = cmd {
        let store = CsvStore::open(&cfg.data_file)?;
        let mut records = store.load_all()?;

        if let Some(r) = range {
            let (start, end) = parse_range(r)?;
            records.retain(|rec| rec.date >= start && rec.date <= end);
        }

        // Every producer returns None on an empty collection; one check
        // up front keeps the dashboard honest about data availability.
        let Some(metrics) = ReportLogic::summary_metrics(&records) else {
            info("No data available yet.");
            return Ok(());
        };

        header("Overtime Analysis Dashboard");

        //
        // Summary metrics
        //
        println!(
            "{}• Total employees:{}     {}",
            CYAN, RESET, metrics.total_employees
        );
        println!(
            "{}• Total OT hours:{}      {}",
            CYAN,
            RESET,
            fmt_hours(metrics.total_hours)
        );
        println!(
            "{}• Avg. OT/employee:{}    {}",
            CYAN,
            RESET,
            fmt_hours(metrics.avg_hours_per_employee)
        );
        println!(
            "{}• Active departments:{}  {}",
            CYAN, RESET, metrics.department_count
        );
        println!();

        if let Some(rows) = ReportLogic::employee_department_summary(&records) {
            print_employee_summary(&rows);
        }

        if let Some(series) = ReportLogic::department_comparison_series(&records) {
            print_department_chart(&series, cfg.chart_width);
        }

        if let Some(points) = ReportLogic::daily_trend_series(&records) {
            print_daily_trend(&points, cfg.chart_width);
        }
    }
    Ok(())
}

fn print_employee_summary(rows: &[EmployeeSummaryRow]) {
    println!("📋 Overtime Summary by Employee\n");

    let mut table = Table::new(vec![
        Column::new("Name", 12),
        Column::new("Designation", 11),
        Column::new("Scheduling", 10),
        Column::new("OCC", 5),
        Column::new("Training", 8),
        Column::new("Operations", 10),
        Column::new("Total", 5),
    ]);

    for row in rows {
        table.add_row(vec![
            row.name.clone(),
            row.designation.clone(),
            fmt_hours(row.scheduling_ot),
            fmt_hours(row.occ_ot),
            fmt_hours(row.training_ot),
            fmt_hours(row.ops_ot),
            fmt_hours(row.total_ot),
        ]);
    }

    print!("{}", table.render());
    println!();
}

/// Grouped bar comparison: one block per employee, one colored bar per
/// department.
fn print_department_chart(series: &DepartmentSeries, width: usize) {
    println!("📊 Overtime by Department\n");

    let max = series
        .series
        .iter()
        .flat_map(|(_, values)| values.iter())
        .fold(0.0_f64, |m, v| m.max(*v));

    for (i, name) in series.employees.iter().enumerate() {
        println!("{}", bold(name));

        for (dept, values) in &series.series {
            let v = values[i];
            let color = color_for_department(*dept);
            println!(
                "  {:<10} {}{}{} {}",
                dept.label(),
                color,
                chart::bar(v, max, width),
                RESET,
                colorize_hours(v, &fmt_hours(v))
            );
        }
        println!();
    }
}

/// Daily trend: one bar per calendar day, ascending.
fn print_daily_trend(points: &[TrendPoint], width: usize) {
    println!("📈 Daily Overtime Trend\n");

    let max = points.iter().fold(0.0_f64, |m, p| m.max(p.total_ot));

    for p in points {
        println!(
            "  {}  {}{}{} {}",
            p.date,
            GREEN,
            chart::bar(p.total_ot, max, width),
            RESET,
            fmt_hours(p.total_ot)
        );
    }
    println!();
}
