use crate::cli::parser::Commands;
use crate::core::intake::{EntryForm, IntakeLogic};
use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::status::Status;
use crate::store::CsvStore;
use crate::store::log::otlog;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::fmt_hours;

/// Record one overtime entry.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        department,
        date: date_str,
        id,
        name,
        designation,
        status,
        hours,
        approved_by,
    } = cmd
    {
        //
        // 1. Parse department (mandatory)
        //
        let dept = Department::from_code(department).ok_or_else(|| {
            AppError::InvalidDepartment(format!(
                "Invalid department code '{}'. Use 'scheduling', 'occ', 'training' or 'operations'.",
                department
            ))
        })?;

        //
        // 2. Parse date (default = today)
        //
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 3. Parse status (default from config)
        //
        let status_final = match status {
            Some(s) => Status::from_input(s).ok_or_else(|| {
                AppError::InvalidStatus(format!(
                    "Invalid status '{}'. Use 'active', 'on-leave' or 'training'.",
                    s
                ))
            })?,
            None => Status::from_input(&cfg.default_status).unwrap_or(Status::Active),
        };

        //
        // 4. Open store
        //
        let store = CsvStore::open(&cfg.data_file)?;

        //
        // 5. Build the form and submit
        //
        let form = EntryForm {
            date: d,
            employee_id: id.clone().unwrap_or_default(),
            employee_name: name.clone().unwrap_or_default(),
            designation: designation.clone().unwrap_or_default(),
            status: status_final,
            hours: hours.unwrap_or(0.0),
            approved_by: approved_by.clone().unwrap_or_default(),
        };

        let record = IntakeLogic::submit(&store, dept, form)?;

        //
        // 6. Report outcome + audit log
        //
        success(format!(
            "Overtime entry added for {} ({} h, {}, {})",
            record.employee_name,
            fmt_hours(record.total_ot),
            dept.label(),
            record.date_str()
        ));

        if let Err(e) = otlog(
            &store.log_path(),
            "add",
            &record.employee_id,
            &format!("{} h filed under {}", fmt_hours(record.total_ot), dept.label()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
