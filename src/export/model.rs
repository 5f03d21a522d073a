use crate::models::record::OvertimeRecord;
use crate::utils::formatting::fmt_hours;
use serde::Serialize;

/// Flat stringly row for record export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub date: String,
    pub id: String,
    pub name: String,
    pub designation: String,
    pub status: String,
    pub scheduling_ot: f64,
    pub occ_ot: f64,
    pub training_ot: f64,
    pub ops_ot: f64,
    pub approved_by: String,
    pub total_ot: f64,
    pub entry_timestamp: String,
}

impl From<&OvertimeRecord> for RecordExport {
    fn from(r: &OvertimeRecord) -> Self {
        Self {
            date: r.date_str(),
            id: r.employee_id.clone(),
            name: r.employee_name.clone(),
            designation: r.designation.clone(),
            status: r.status.as_str().to_string(),
            scheduling_ot: r.scheduling_ot,
            occ_ot: r.occ_ot,
            training_ot: r.training_ot,
            ops_ot: r.ops_ot,
            approved_by: r.approved_by.clone(),
            total_ot: r.total_ot,
            entry_timestamp: r.entry_timestamp.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "id",
        "name",
        "designation",
        "status",
        "scheduling_ot",
        "occ_ot",
        "training_ot",
        "ops_ot",
        "approved_by",
        "total_ot",
        "entry_timestamp",
    ]
}

/// Convert one record into a row of display strings (for XLSX).
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.id.clone(),
        r.name.clone(),
        r.designation.clone(),
        r.status.clone(),
        fmt_hours(r.scheduling_ot),
        fmt_hours(r.occ_ot),
        fmt_hours(r.training_ot),
        fmt_hours(r.ops_ot),
        r.approved_by.clone(),
        fmt_hours(r.total_ot),
        r.entry_timestamp.clone(),
    ]
}
