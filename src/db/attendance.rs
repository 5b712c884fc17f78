//! Attendance records.

use super::{AttendanceId, EmployeeId};
use crate::libs::time;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one employee's working day.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    /// Every status, in display order.
    pub const ALL: [AttendanceStatus; 3] = [AttendanceStatus::Present, AttendanceStatus::Late, AttendanceStatus::Absent];

    /// `true` for statuses where the employee showed up.
    pub fn is_attending(self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One employee's check-in/out status for a single calendar date.
///
/// `employee_name` and `department` are copied from the employee when the
/// record is stored and are not updated afterwards, so a report keeps the
/// names that were valid on the day. Time fields hold `HH:MM:SS` strings and
/// are empty for [`AttendanceStatus::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub department: String,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
    pub time_in: String,
    pub time_out: String,
    pub break_time: String,
}

impl AttendanceRecord {
    /// Hours worked on this day; zero for absent or incomplete records.
    pub fn work_hours(&self) -> f64 {
        time::work_hours(&self.time_in, &self.time_out, &self.break_time)
    }
}

/// Caller-supplied attendance fields.
///
/// The store assigns the id and fills in the employee name and department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub employee_id: EmployeeId,
    pub status: AttendanceStatus,
    pub date: NaiveDate,
    pub time_in: String,
    pub time_out: String,
    pub break_time: String,
}

impl NewAttendance {
    pub fn present(employee_id: EmployeeId, date: NaiveDate, time_in: &str, time_out: &str, break_time: &str) -> Self {
        Self::attended(AttendanceStatus::Present, employee_id, date, time_in, time_out, break_time)
    }

    pub fn late(employee_id: EmployeeId, date: NaiveDate, time_in: &str, time_out: &str, break_time: &str) -> Self {
        Self::attended(AttendanceStatus::Late, employee_id, date, time_in, time_out, break_time)
    }

    pub fn absent(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            status: AttendanceStatus::Absent,
            date,
            time_in: String::new(),
            time_out: String::new(),
            break_time: String::new(),
        }
    }

    fn attended(
        status: AttendanceStatus,
        employee_id: EmployeeId,
        date: NaiveDate,
        time_in: &str,
        time_out: &str,
        break_time: &str,
    ) -> Self {
        Self {
            employee_id,
            status,
            date,
            time_in: time_in.to_string(),
            time_out: time_out.to_string(),
            break_time: break_time.to_string(),
        }
    }
}
