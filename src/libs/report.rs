//! Attendance report figures.
//!
//! Combines the counting views from [`crate::libs::aggregate`] into the
//! values shown by the statistics tab of the attendance report.
//!
//! ## Formulas
//!
//! ```text
//! attendance_rate = (present + late) / total * 100
//! present_rate    = present / total * 100
//! late_rate       = late / total * 100
//! absent_rate     = absent / total * 100
//! ```
//!
//! Every rate is `0.0` for an empty record set.
//!
//! ## Tie Breaking
//!
//! - **Top department**: the first department in the given order among those
//!   with the highest count.
//! - **Peak day**: the earliest date among those with the highest number of
//!   present records.

use crate::db::attendance::{AttendanceRecord, AttendanceStatus};
use crate::libs::aggregate::{aggregate, Aggregate, DailyCounts, DepartmentCount, StatusCounts};
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub status_counts: StatusCounts,
    pub attendance_rate: f64,
    pub present_rate: f64,
    pub late_rate: f64,
    pub absent_rate: f64,
    pub top_department: Option<DepartmentCount>,
    pub peak_day: Option<(NaiveDate, StatusCounts)>,
}

impl ReportSummary {
    /// Share of records with `status`, in percent.
    pub fn status_rate(&self, status: AttendanceStatus) -> f64 {
        match status {
            AttendanceStatus::Present => self.present_rate,
            AttendanceStatus::Late => self.late_rate,
            AttendanceStatus::Absent => self.absent_rate,
        }
    }
}

/// `part / total * 100`, or `0.0` when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Department with the highest count, first one wins on ties.
pub fn top_department(department_counts: &[DepartmentCount]) -> Option<DepartmentCount> {
    department_counts
        .iter()
        .fold(None::<&DepartmentCount>, |best, candidate| match best {
            Some(current) if candidate.count <= current.count => Some(current),
            _ => Some(candidate),
        })
        .cloned()
}

/// Day with the most present records, earliest one wins on ties.
pub fn peak_day(daily_counts: &DailyCounts) -> Option<(NaiveDate, StatusCounts)> {
    daily_counts
        .iter()
        .fold(None::<(&NaiveDate, &StatusCounts)>, |best, (date, counts)| match best {
            Some((_, current)) if counts.present <= current.present => best,
            _ => Some((date, counts)),
        })
        .map(|(date, counts)| (*date, *counts))
}

/// Summary figures computed from an already counted record set.
pub fn summarize(aggregate: &Aggregate) -> ReportSummary {
    let counts = aggregate.status_counts;
    let total = counts.total();

    ReportSummary {
        total,
        status_counts: counts,
        attendance_rate: percentage(counts.attending(), total),
        present_rate: percentage(counts.present, total),
        late_rate: percentage(counts.late, total),
        absent_rate: percentage(counts.absent, total),
        top_department: top_department(&aggregate.department_counts),
        peak_day: peak_day(&aggregate.daily_counts),
    }
}

/// Counts `records` and computes the report figures in one step.
///
/// # Examples
///
/// ```rust
/// use presence::libs::report::assemble;
/// use presence::db::attendance::AttendanceRecord;
///
/// let records: Vec<AttendanceRecord> = Vec::new();
/// let summary = assemble(&records, &["Engineering"]);
/// assert_eq!(summary.attendance_rate, 0.0);
/// ```
pub fn assemble<R, D>(records: &[R], departments: &[D]) -> ReportSummary
where
    R: Borrow<AttendanceRecord>,
    D: AsRef<str>,
{
    let summary = summarize(&aggregate(records, departments));
    debug!(
        total = summary.total,
        attendance_rate = summary.attendance_rate,
        top_department = ?summary.top_department.as_ref().map(|d| d.name.as_str()),
        peak_day = ?summary.peak_day.map(|(date, _)| date),
        "Assembled attendance report"
    );
    summary
}
