//! Attendance counting.
//!
//! Reduces a set of attendance records into three views used by the
//! statistics screens:
//!
//! - **Status counts**: records per [`AttendanceStatus`]
//! - **Department counts**: records per known department, zero rows included
//! - **Daily counts**: records per status for every date that occurs
//!
//! Every view is a commutative reduction, so the result does not depend on
//! the order of the input records.

use crate::db::attendance::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};

/// Per-status record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
        }
    }

    pub fn get(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Absent => self.absent,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.late + self.absent
    }

    /// Present plus late.
    pub fn attending(&self) -> usize {
        self.present + self.late
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub name: String,
    pub count: usize,
}

/// Status counts keyed by calendar date, ascending.
pub type DailyCounts = BTreeMap<NaiveDate, StatusCounts>;

/// Counting helpers over any slice of records or record references.
pub trait AttendanceStats {
    fn status_counts(&self) -> StatusCounts;
    fn daily_counts(&self) -> DailyCounts;
    /// One entry per department in the order given, including zero counts.
    /// Records of departments outside the list are ignored.
    fn department_counts<D: AsRef<str>>(&self, departments: &[D]) -> Vec<DepartmentCount>;
}

impl<R: Borrow<AttendanceRecord>> AttendanceStats for [R] {
    fn status_counts(&self) -> StatusCounts {
        self.iter().fold(StatusCounts::default(), |mut counts, record| {
            counts.record(record.borrow().status);
            counts
        })
    }

    fn daily_counts(&self) -> DailyCounts {
        let mut daily = DailyCounts::new();
        for record in self {
            let record = record.borrow();
            daily.entry(record.date).or_default().record(record.status);
        }
        daily
    }

    fn department_counts<D: AsRef<str>>(&self, departments: &[D]) -> Vec<DepartmentCount> {
        let mut by_name: HashMap<&str, usize> = HashMap::new();
        for record in self {
            *by_name.entry(record.borrow().department.as_str()).or_default() += 1;
        }

        departments
            .iter()
            .map(|department| {
                let name = department.as_ref();
                DepartmentCount {
                    name: name.to_string(),
                    count: by_name.get(name).copied().unwrap_or(0),
                }
            })
            .collect()
    }
}

/// All three counting views of one record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub status_counts: StatusCounts,
    pub department_counts: Vec<DepartmentCount>,
    pub daily_counts: DailyCounts,
}

impl Aggregate {
    /// The most recent `days` daily buckets, oldest first.
    pub fn trend(&self, days: usize) -> Vec<(NaiveDate, StatusCounts)> {
        let skip = self.daily_counts.len().saturating_sub(days);
        self.daily_counts.iter().skip(skip).map(|(date, counts)| (*date, *counts)).collect()
    }

    /// Department counts, highest first; equal counts keep their input order.
    pub fn departments_by_count(&self) -> Vec<DepartmentCount> {
        let mut departments = self.department_counts.clone();
        departments.sort_by(|a, b| b.count.cmp(&a.count));
        departments
    }
}

/// Counts `records` by status, by department and by day.
pub fn aggregate<R, D>(records: &[R], departments: &[D]) -> Aggregate
where
    R: Borrow<AttendanceRecord>,
    D: AsRef<str>,
{
    Aggregate {
        status_counts: records.status_counts(),
        department_counts: records.department_counts(departments),
        daily_counts: records.daily_counts(),
    }
}
