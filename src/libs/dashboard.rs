//! Company-wide attendance overview for a single day.
//!
//! The dashboard relates the day's attendance to the whole workforce rather
//! than to the number of records, so an employee without a record for the
//! day lowers the rate:
//!
//! ```text
//! attendance_rate = round((present_today + late_today) / total_employees * 100)
//! ```

use crate::db::attendance::AttendanceRecord;
use crate::db::employees::DEFAULT_EMPLOYEE_STATUS;
use crate::db::store::Store;
use crate::libs::aggregate::{AttendanceStats, DepartmentCount, StatusCounts};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Upper bounds (exclusive) of the work-hour buckets; the last bucket is open.
const HOUR_BUCKETS: [(f64, &str); 3] = [(7.0, "< 7 hours"), (8.0, "7-8 hours"), (9.0, "8-9 hours")];
const LAST_HOUR_BUCKET: &str = "9+ hours";

/// Longest trend the dashboard builds; longer requests are cut to this.
pub const MAX_TREND_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoursBucket {
    pub label: String,
    pub employees: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub total_employees: usize,
    pub active_employees: usize,
    pub today: StatusCounts,
    /// Whole percent.
    pub attendance_rate: u32,
    /// One entry per calendar day ending at `date`, oldest first.
    pub trend: Vec<(NaiveDate, StatusCounts)>,
    /// Employees per department, in department order.
    pub department_distribution: Vec<DepartmentCount>,
    /// Attended records in the trend window grouped by hours worked.
    pub work_hours: Vec<HoursBucket>,
}

/// Builds the dashboard for `today` with a trend of `days` calendar days.
///
/// `days` is capped at [`MAX_TREND_DAYS`], and the window never reaches
/// before the earliest representable date.
pub fn dashboard(store: &Store, today: NaiveDate, days: u32) -> DashboardSummary {
    let attendances = store.attendances();
    let todays: Vec<&AttendanceRecord> = attendances.iter().filter(|a| a.date == today).collect();
    let today_counts = todays.status_counts();

    let total_employees = store.employees().len();
    let active_employees = store
        .employees()
        .iter()
        .filter(|e| e.status == DEFAULT_EMPLOYEE_STATUS)
        .count();

    let attendance_rate = if total_employees > 0 {
        (today_counts.attending() as f64 / total_employees as f64 * 100.0).round() as u32
    } else {
        0
    };

    let days = days.min(MAX_TREND_DAYS);
    let window_start = today
        .checked_sub_signed(Duration::days(i64::from(days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MIN);
    let window: Vec<&AttendanceRecord> = attendances
        .iter()
        .filter(|a| a.date >= window_start && a.date <= today)
        .collect();
    let daily = window.daily_counts();
    let trend = window_start
        .iter_days()
        .take_while(|date| *date <= today)
        .take(days as usize)
        .map(|date| (date, daily.get(&date).copied().unwrap_or_default()))
        .collect();

    let department_distribution = store
        .departments()
        .iter()
        .map(|department| DepartmentCount {
            name: department.name.clone(),
            count: store
                .employees()
                .iter()
                .filter(|e| e.department_id == department.id)
                .count(),
        })
        .collect();

    DashboardSummary {
        date: today,
        total_employees,
        active_employees,
        today: today_counts,
        attendance_rate,
        trend,
        department_distribution,
        work_hours: work_hours_distribution(&window),
    }
}

/// Groups attended records by hours worked.
pub fn work_hours_distribution(records: &[&AttendanceRecord]) -> Vec<HoursBucket> {
    let mut counts = [0usize; HOUR_BUCKETS.len() + 1];
    for record in records.iter().filter(|r| r.status.is_attending()) {
        let hours = record.work_hours();
        let slot = HOUR_BUCKETS
            .iter()
            .position(|(limit, _)| hours < *limit)
            .unwrap_or(HOUR_BUCKETS.len());
        counts[slot] += 1;
    }

    HOUR_BUCKETS
        .iter()
        .map(|(_, label)| *label)
        .chain(std::iter::once(LAST_HOUR_BUCKET))
        .zip(counts)
        .map(|(label, employees)| HoursBucket {
            label: label.to_string(),
            employees,
        })
        .collect()
}
