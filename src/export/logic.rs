use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RecordExport;
use crate::store::CsvStore;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::path::is_absolute;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored records.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &CsvStore,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = Path::new(file);

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(store, date_bounds)?;

        if rows.is_empty() {
            warning("⚠️  No records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}

/// Load the records within the bounds, in insertion order.
fn load_rows(
    store: &CsvStore,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<RecordExport>> {
    let records = store.load_all()?;

    let rows = records
        .iter()
        .filter(|r| match bounds {
            None => true,
            Some((start, end)) => r.date >= start && r.date <= end,
        })
        .map(RecordExport::from)
        .collect();

    Ok(rows)
}
