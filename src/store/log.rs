//! Sidecar audit log: one row per store-touching operation.

use crate::errors::AppResult;
use ansi_term::Colour;
use chrono::Local;
use std::fs::OpenOptions;
use std::path::Path;

/// Append an audit line (`timestamp, operation, target, message`) to the
/// log file next to the data file.
pub fn otlog(log_path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Color per operation kind in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "backup" => Colour::Blue,
        "export" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(log_path: &Path) -> AppResult<()> {
        if !log_path.exists() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(log_path)?;

        let mut entries: Vec<(String, String, String, String)> = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let raw_date = row.get(0).unwrap_or("").to_string();
            let operation = row.get(1).unwrap_or("").to_string();
            let target = row.get(2).unwrap_or("").to_string();
            let message = row.get(3).unwrap_or("").to_string();

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            entries.push((date, operation, target, message));
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|(date, ..)| date.len()).max().unwrap();
        let op_w = entries
            .iter()
            .map(|(_, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap()
            .min(60);

        println!("📜 Internal log:\n");

        for (i, (date, operation, target, message)) in entries.iter().enumerate() {
            let color = color_for_operation(operation);

            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                colored.push_str(&format!(" ({target})"));
            }

            // padding computed on the visible length, without ANSI
            let visible = strip_ansi(&colored);
            let padding = " ".repeat(op_w.saturating_sub(visible.len()));

            println!(
                "{:>3}: {:<date_w$} | {}{} => {}",
                i + 1,
                date,
                colored,
                padding,
                message,
                date_w = date_w
            );
        }

        Ok(())
    }
}
