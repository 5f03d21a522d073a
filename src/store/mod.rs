//! Flat-file record store.
//!
//! All overtime entries live in a single CSV file with a fixed header.
//! Append works by full read-modify-rewrite; there is no partial-write
//! protection and no locking, so a crash mid-rewrite can corrupt the file
//! and concurrent writers can lose rows. Known limitation of the flat-file
//! design for this single-user tool.

pub mod log;
pub mod stats;

use crate::errors::AppResult;
use crate::models::record::OvertimeRecord;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Column header of the data file, in persisted order.
pub const HEADERS: [&str; 12] = [
    "Date",
    "ID",
    "Name",
    "Designation",
    "Status",
    "Scheduling_OT",
    "OCC_OT",
    "Training_OT",
    "OPS_OT",
    "Approved_By",
    "Total_OT",
    "Entry_Timestamp",
];

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open the store, creating the data file (header only) if missing.
    pub fn open(path: &str) -> AppResult<Self> {
        let store = Self {
            path: expand_tilde(path),
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the containing directory and the data file exist.
    /// Idempotent; safe to call on every startup.
    pub fn initialize(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !self.path.exists() {
            let mut wtr = csv::Writer::from_path(&self.path)?;
            wtr.write_record(HEADERS)?;
            wtr.flush()?;
        }

        Ok(())
    }

    /// Read the entire persisted collection in insertion order.
    /// A header-only file yields an empty vec, not an error; malformed
    /// rows (unparsable dates, bad numbers) surface as a store error.
    pub fn load_all(&self) -> AppResult<Vec<OvertimeRecord>> {
        let mut rdr = csv::Reader::from_path(&self.path)?;

        let mut records = Vec::new();
        for row in rdr.deserialize() {
            let record: OvertimeRecord = row?;
            records.push(record);
        }

        Ok(records)
    }

    /// Append one record: stamps `entry_timestamp`, then rewrites the whole
    /// file with the record at the end. Returns the record as stored.
    pub fn append(&self, mut record: OvertimeRecord) -> AppResult<OvertimeRecord> {
        let mut records = self.load_all()?;

        record.entry_timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        records.push(record.clone());

        self.save_all(&records)?;
        Ok(record)
    }

    /// Rewrite the full collection, header included.
    pub fn save_all(&self, records: &[OvertimeRecord]) -> AppResult<()> {
        let mut wtr = csv::Writer::from_path(&self.path)?;

        for record in records {
            wtr.serialize(record)?;
        }
        if records.is_empty() {
            wtr.write_record(HEADERS)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Path of the sidecar audit log next to the data file.
    pub fn log_path(&self) -> PathBuf {
        self.path.with_extension("log")
    }
}
