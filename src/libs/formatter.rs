//! Display formatting for attendance data.
//!
//! Converts clock values, worked hours, durations and rates into the strings
//! shown in tables and written to exports.
//!
//! ## Formats
//!
//! - **Clock**: `HH:MM`, seconds dropped; `—` when missing
//! - **Hours**: one decimal and an `h` suffix, e.g. `7.8h`
//! - **Duration**: `HH:MM`, negative values shown as `00:00`
//! - **Percent**: one decimal and a `%` suffix, e.g. `66.7%`
//!
//! ## Examples
//!
//! ```rust
//! use presence::libs::formatter::{format_clock, format_hours, format_percent};
//!
//! assert_eq!(format_clock("09:00:00"), "09:00");
//! assert_eq!(format_hours(7.75), "7.8h");
//! assert_eq!(format_percent(200.0 / 3.0), "66.7%");
//! ```

use crate::db::attendance::AttendanceRecord;
use crate::libs::time;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Placeholder for a value that does not apply, such as the hours of an
/// absent record.
pub const EMPTY_CELL: &str = "—";

/// One attendance record prepared for table display and export.
///
/// Every field is pre-formatted, so the same rows feed the terminal table,
/// the CSV writer and the JSON writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub employee: String,
    pub department: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub work_hours: String,
}

impl From<&AttendanceRecord> for ReportRow {
    fn from(record: &AttendanceRecord) -> Self {
        let work_hours = if record.status.is_attending() {
            format_hours(record.work_hours())
        } else {
            EMPTY_CELL.to_string()
        };

        ReportRow {
            employee: record.employee_name.clone(),
            department: record.department.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            check_in: format_clock(&record.time_in),
            check_out: format_clock(&record.time_out),
            status: record.status.to_string(),
            work_hours,
        }
    }
}

/// Builds display rows for a list of records, keeping their order.
pub fn report_rows<'a, I>(records: I) -> Vec<ReportRow>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records.into_iter().map(ReportRow::from).collect()
}

/// `HH:MM` part of a clock value, or [`EMPTY_CELL`] when it does not parse.
pub fn format_clock(value: &str) -> String {
    match time::parse_clock_minutes(value) {
        Some(minutes) => format!("{:02}:{:02}", minutes / 60, minutes % 60),
        None => EMPTY_CELL.to_string(),
    }
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Rounds to one decimal place, as rates are shown.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a duration as `HH:MM`; negative durations show as `00:00`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}
