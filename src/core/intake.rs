//! Entry intake: validate a submitted form, shape the department hour
//! columns and hand the record to the store.

use crate::errors::{AppError, AppResult};
use crate::models::department::Department;
use crate::models::record::OvertimeRecord;
use crate::models::status::Status;
use crate::store::CsvStore;
use chrono::NaiveDate;

/// Raw field values of one overtime submission, before shaping.
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub date: NaiveDate,
    pub employee_id: String,
    pub employee_name: String,
    pub designation: String,
    pub status: Status,
    pub hours: f64,
    pub approved_by: String,
}

pub struct IntakeLogic;

impl IntakeLogic {
    /// Validate and persist one submission.
    ///
    /// The column matching `department` receives the submitted hours, the
    /// other three are zero and `total_ot` equals the submitted hours. On
    /// validation failure nothing is written.
    pub fn submit(
        store: &CsvStore,
        department: Department,
        form: EntryForm,
    ) -> AppResult<OvertimeRecord> {
        Self::validate(&form)?;
        let record = Self::shape(department, form);
        store.append(record)
    }

    /// Presence checks for the required fields, hours >= 0.
    /// One error names every missing field.
    pub fn validate(form: &EntryForm) -> AppResult<()> {
        let mut missing = Vec::new();

        if form.employee_id.trim().is_empty() {
            missing.push("id");
        }
        if form.employee_name.trim().is_empty() {
            missing.push("name");
        }
        if form.designation.trim().is_empty() {
            missing.push("designation");
        }
        if form.approved_by.trim().is_empty() {
            missing.push("approved-by");
        }

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing.join(", ")));
        }

        if form.hours < 0.0 {
            return Err(AppError::InvalidHours(form.hours));
        }

        Ok(())
    }

    /// Build the record: submitted hours land in the department's column,
    /// the other three columns are zero.
    pub fn shape(department: Department, form: EntryForm) -> OvertimeRecord {
        let hours = form.hours;
        let hours_in = |d: Department| if d == department { hours } else { 0.0 };

        OvertimeRecord {
            date: form.date,
            employee_id: form.employee_id,
            employee_name: form.employee_name,
            designation: form.designation,
            status: form.status,
            scheduling_ot: hours_in(Department::Scheduling),
            occ_ot: hours_in(Department::Occ),
            training_ot: hours_in(Department::Training),
            ops_ot: hours_in(Department::Operations),
            approved_by: form.approved_by,
            total_ot: hours,
            entry_timestamp: String::new(), // assigned by the store
        }
    }
}
