use super::{EmployeeId, LeaveId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LeaveState {
    Approved,
    Pending,
    Rejected,
}

impl fmt::Display for LeaveState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leave {
    pub id: LeaveId,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub state: LeaveState,
}

impl Leave {
    /// Calendar days covered by the leave, both ends included.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeave {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub state: LeaveState,
}

impl NewLeave {
    pub fn new(employee_id: EmployeeId, start_date: NaiveDate, end_date: NaiveDate, reason: &str, state: LeaveState) -> Self {
        Self {
            employee_id,
            start_date,
            end_date,
            reason: reason.to_string(),
            state,
        }
    }
}
