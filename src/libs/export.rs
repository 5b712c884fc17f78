//! Attendance report export.
//!
//! Writes the rows of a filtered attendance report to a file so it can be
//! opened in a spreadsheet or processed by other tools.
//!
//! ## Formats
//!
//! - **CSV**: one header line and one line per record
//! - **JSON**: a pretty-printed array of row objects
//!
//! ## Usage
//!
//! ```rust,no_run
//! use presence::libs::export::{ExportFormat, Exporter};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let exporter = Exporter::new(ExportFormat::Csv, None, date);
//! exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::formatter::ReportRow;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, for spreadsheets.
    Csv,
    /// Pretty-printed JSON array, for programmatic use.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Writes report rows in one format to one file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `attendance_report_<date>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, date: NaiveDate) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("attendance_report_{}.{}", date.format("%Y-%m-%d"), format.extension()))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `rows` and returns the path written to.
    pub fn export(&self, rows: &[ReportRow]) -> Result<PathBuf> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(msg_error_anyhow!(Message::ExportDirectoryMissing(parent.display().to_string())));
            }
        }

        match self.format {
            ExportFormat::Csv => self.export_csv(rows)?,
            ExportFormat::Json => self.export_json(rows)?,
        }

        debug!(path = %self.output_path.display(), rows = rows.len(), format = ?self.format, "Exported attendance report");
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[ReportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Employee", "Department", "Date", "Check-In", "Check-Out", "Status", "Work Hours"])?;

        for row in rows {
            wtr.write_record([
                row.employee.as_str(),
                row.department.as_str(),
                row.date.as_str(),
                row.check_in.as_str(),
                row.check_out.as_str(),
                row.status.as_str(),
                row.work_hours.as_str(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ReportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
