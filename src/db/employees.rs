use super::{DepartmentId, DesignationId, EmployeeId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave allowance given to new hires.
pub const DEFAULT_LEAVE_ALLOWANCE: u32 = 21;

/// Employee status label assigned to new hires.
pub const DEFAULT_EMPLOYEE_STATUS: &str = "Active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department_id: DepartmentId,
    pub designation_id: DesignationId,
    pub join_date: NaiveDate,
    /// Free-text label such as "Active" or "On Leave".
    pub status: String,
    pub days_present: u32,
    pub total_leaves: u32,
    pub remaining_leaves: u32,
}

/// Caller-supplied employee fields; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department_id: DepartmentId,
    pub designation_id: DesignationId,
    pub join_date: NaiveDate,
    pub status: String,
    pub days_present: u32,
    pub total_leaves: u32,
    pub remaining_leaves: u32,
}

impl NewEmployee {
    /// A new hire with an empty contact card and the default leave allowance.
    pub fn new(
        name: &str,
        email: &str,
        department_id: DepartmentId,
        designation_id: DesignationId,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            address: String::new(),
            department_id,
            designation_id,
            join_date,
            status: DEFAULT_EMPLOYEE_STATUS.to_string(),
            days_present: 0,
            total_leaves: DEFAULT_LEAVE_ALLOWANCE,
            remaining_leaves: DEFAULT_LEAVE_ALLOWANCE,
        }
    }

    pub fn with_contact(mut self, phone: &str, address: &str) -> Self {
        self.phone = phone.to_string();
        self.address = address.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_leave_balance(mut self, days_present: u32, total_leaves: u32, remaining_leaves: u32) -> Self {
        self.days_present = days_present;
        self.total_leaves = total_leaves;
        self.remaining_leaves = remaining_leaves;
        self
    }

    pub(crate) fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            department_id: self.department_id,
            designation_id: self.designation_id,
            join_date: self.join_date,
            status: self.status,
            days_present: self.days_present,
            total_leaves: self.total_leaves,
            remaining_leaves: self.remaining_leaves,
        }
    }
}
