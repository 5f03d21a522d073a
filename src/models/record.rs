use super::{department::Department, status::Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted overtime entry. Field names map 1:1 onto the data file
/// columns via serde renames; records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ Date (TEXT "YYYY-MM-DD")
    #[serde(rename = "ID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub employee_name: String,
    #[serde(rename = "Designation")]
    pub designation: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Scheduling_OT")]
    pub scheduling_ot: f64,
    #[serde(rename = "OCC_OT")]
    pub occ_ot: f64,
    #[serde(rename = "Training_OT")]
    pub training_ot: f64,
    #[serde(rename = "OPS_OT")]
    pub ops_ot: f64,
    #[serde(rename = "Approved_By")]
    pub approved_by: String,
    #[serde(rename = "Total_OT")]
    pub total_ot: f64,
    #[serde(rename = "Entry_Timestamp")]
    pub entry_timestamp: String, // assigned by the store at append time
}

impl OvertimeRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Hours filed under the given department column.
    pub fn hours_for(&self, dept: Department) -> f64 {
        match dept {
            Department::Scheduling => self.scheduling_ot,
            Department::Occ => self.occ_ot,
            Department::Training => self.training_ot,
            Department::Operations => self.ops_ot,
        }
    }

    /// The department this entry was filed under: the single column holding
    /// a non-zero value. None for an (out-of-contract) all-zero row.
    pub fn department(&self) -> Option<Department> {
        Department::ALL.into_iter().find(|d| self.hours_for(*d) != 0.0)
    }
}
