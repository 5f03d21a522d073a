use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::store::CsvStore;
use crate::utils::date::{month_name, parse_range};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range, dept } = cmd {
        let store = CsvStore::open(&cfg.data_file)?;
        let mut records = store.load_all()?;

        if let Some(r) = range {
            let (start, end) = parse_range(r)?;
            records.retain(|rec| rec.date >= start && rec.date <= end);
        }

        if let Some(code) = dept {
            let d = Department::from_code(code).ok_or_else(|| {
                AppError::InvalidDepartment(format!(
                    "Invalid department code '{}'. Use 'scheduling', 'occ', 'training' or 'operations'.",
                    code
                ))
            })?;
            records.retain(|rec| rec.hours_for(d) != 0.0);
        }

        if records.is_empty() {
            println!("No overtime entries found.");
            return Ok(());
        }

        // Newest first, matching the dashboard table order
        records.sort_by(|a, b| b.date.cmp(&a.date));

        println!("📅 {}:\n", list_title(range));

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("ID", 4),
            Column::new("Name", 12),
            Column::new("Designation", 11),
            Column::new("Status", 8),
            Column::new("Department", 10),
            Column::new("Hours", 5),
            Column::new("Approved By", 11),
        ]);

        for rec in &records {
            table.add_row(vec![
                rec.date_str(),
                rec.employee_id.clone(),
                rec.employee_name.clone(),
                rec.designation.clone(),
                rec.status.as_str().to_string(),
                rec.department()
                    .map(|d| d.label().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                fmt_hours(rec.total_ot),
                rec.approved_by.clone(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}

/// Build the listing title from the selected range.
fn list_title(range: &Option<String>) -> String {
    let Some(r) = range else {
        return "Saved overtime entries".to_string();
    };

    if let Some((start, end)) = r.split_once(':') {
        return format!("Saved overtime entries from {} to {}", start, end);
    }

    match r.len() {
        // YYYY
        4 => format!("Saved overtime entries for year {}", r),

        // YYYY-MM
        7 => {
            let parts: Vec<&str> = r.split('-').collect();
            if parts.len() == 2 {
                format!(
                    "Saved overtime entries for {} {}",
                    month_name(parts[1]),
                    parts[0]
                )
            } else {
                "Saved overtime entries".to_string()
            }
        }

        // YYYY-MM-DD
        10 => format!("Saved overtime entries for date {}", r),

        _ => "Saved overtime entries".to_string(),
    }
}
