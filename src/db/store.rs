//! The attendance register and its state transitions.
//!
//! [`Store`] owns every entity collection. Changes are expressed as
//! [`Command`] values and applied with [`Store::apply`], which returns the next
//! state and leaves the current one untouched:
//!
//! ```text
//! (store, command) -> Result<store', StoreError>
//! ```
//!
//! ## Reference Rules
//!
//! - A designation must point at an existing department.
//! - An employee must point at an existing department and at a designation of
//!   that same department.
//! - A department cannot be deleted while a designation or employee refers to
//!   it, a designation cannot be deleted while an employee holds it.
//! - Attendance and leave entries must point at an existing employee.
//!
//! Deleting an employee keeps their attendance and leave history; lookups for
//! the removed id simply return nothing.
//!
//! ## Usage
//!
//! ```rust
//! use presence::db::store::{Command, Store};
//!
//! let store = Store::new()
//!     .apply(Command::AddDepartment("Engineering".to_string()))
//!     .unwrap();
//! assert_eq!(store.departments().len(), 1);
//! ```

use super::attendance::{AttendanceRecord, AttendanceStatus, NewAttendance};
use super::employees::{Employee, NewEmployee};
use super::leaves::{Leave, NewLeave};
use super::organization::{Department, Designation, NewDesignation, NewStatusLabel, StatusLabel};
use super::{AttendanceId, DepartmentId, DesignationId, EmployeeId, LeaveId, StatusLabelId};
use crate::libs::time;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Entity families held by the store, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Attendance,
    Leave,
    Department,
    Designation,
    StatusLabel,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EntityKind::Employee => "employee",
            EntityKind::Attendance => "attendance record",
            EntityKind::Leave => "leave",
            EntityKind::Department => "department",
            EntityKind::Designation => "designation",
            EntityKind::StatusLabel => "status label",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    #[error("{0} name must not be empty")]
    EmptyName(EntityKind),

    #[error("department {0} does not exist")]
    UnknownDepartment(DepartmentId),

    #[error("designation {0} does not exist")]
    UnknownDesignation(DesignationId),

    #[error("employee {0} does not exist")]
    UnknownEmployee(EmployeeId),

    #[error("designation {designation} does not belong to department {department}")]
    DesignationOutsideDepartment {
        designation: DesignationId,
        department: DepartmentId,
    },

    #[error("department {0} is still referenced by designations or employees")]
    DepartmentInUse(DepartmentId),

    #[error("designation {0} is still held by an employee")]
    DesignationInUse(DesignationId),

    #[error("invalid attendance times: {0}")]
    InvalidTimes(&'static str),

    #[error("leave ends before it starts")]
    InvalidLeavePeriod,
}

/// A single change to the register.
///
/// Update commands replace every editable field of the target entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEmployee(NewEmployee),
    UpdateEmployee(EmployeeId, NewEmployee),
    DeleteEmployee(EmployeeId),

    AddAttendance(NewAttendance),
    UpdateAttendance(AttendanceId, NewAttendance),
    DeleteAttendance(AttendanceId),

    AddLeave(NewLeave),
    UpdateLeave(LeaveId, NewLeave),
    DeleteLeave(LeaveId),

    AddDepartment(String),
    UpdateDepartment(DepartmentId, String),
    DeleteDepartment(DepartmentId),

    AddDesignation(NewDesignation),
    UpdateDesignation(DesignationId, NewDesignation),
    DeleteDesignation(DesignationId),

    AddStatusLabel(NewStatusLabel),
    UpdateStatusLabel(StatusLabelId, NewStatusLabel),
    DeleteStatusLabel(StatusLabelId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    employees: Vec<Employee>,
    attendances: Vec<AttendanceRecord>,
    leaves: Vec<Leave>,
    departments: Vec<Department>,
    designations: Vec<Designation>,
    statuses: Vec<StatusLabel>,
    next_id: u64,
    last_inserted: Option<u64>,
}

impl Store {
    /// An empty register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one command and returns the resulting register.
    ///
    /// `self` is left unchanged, including when the command is rejected.
    pub fn apply(&self, command: Command) -> Result<Store, StoreError> {
        let mut next = self.clone();
        next.execute(command)?;
        Ok(next)
    }

    /// Applies commands in order; either all of them take effect or none.
    pub fn apply_all<I>(&self, commands: I) -> Result<Store, StoreError>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut next = self.clone();
        for command in commands {
            next.execute(command)?;
        }
        Ok(next)
    }

    /// Raw id assigned by the most recent add command.
    pub fn last_inserted_id(&self) -> Option<u64> {
        self.last_inserted
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn attendances(&self) -> &[AttendanceRecord] {
        &self.attendances
    }

    pub fn leaves(&self) -> &[Leave] {
        &self.leaves
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn designations(&self) -> &[Designation] {
        &self.designations
    }

    pub fn statuses(&self) -> &[StatusLabel] {
        &self.statuses
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn attendance(&self, id: AttendanceId) -> Option<&AttendanceRecord> {
        self.attendances.iter().find(|a| a.id == id)
    }

    pub fn attendance_by_employee(&self, employee_id: EmployeeId) -> Vec<&AttendanceRecord> {
        self.attendances.iter().filter(|a| a.employee_id == employee_id).collect()
    }

    pub fn leaves_by_employee(&self, employee_id: EmployeeId) -> Vec<&Leave> {
        self.leaves.iter().filter(|l| l.employee_id == employee_id).collect()
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn department_name(&self, id: DepartmentId) -> Option<&str> {
        self.department(id).map(|d| d.name.as_str())
    }

    pub fn department_by_name(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn designation(&self, id: DesignationId) -> Option<&Designation> {
        self.designations.iter().find(|d| d.id == id)
    }

    /// Validates and performs one command in place.
    ///
    /// Every check runs before the first mutation, so a rejected command
    /// leaves the collections as they were.
    pub(crate) fn execute(&mut self, command: Command) -> Result<(), StoreError> {
        match command {
            Command::AddEmployee(new) => {
                self.check_employee(&new)?;
                let id = EmployeeId(self.allocate_id());
                debug!(employee_id = %id, name = %new.name, "Adding employee");
                self.employees.push(new.into_employee(id));
            }
            Command::UpdateEmployee(id, new) => {
                self.check_employee(&new)?;
                let slot = self
                    .employees
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(StoreError::NotFound { kind: EntityKind::Employee, id: id.0 })?;
                debug!(employee_id = %id, "Updating employee");
                *slot = new.into_employee(id);
            }
            Command::DeleteEmployee(id) => {
                remove_where(&mut self.employees, |e| e.id == id, EntityKind::Employee, id.0)?;
                debug!(employee_id = %id, "Deleted employee");
            }

            Command::AddAttendance(new) => {
                let id = AttendanceId(self.peek_id());
                let record = self.build_attendance(id, new)?;
                self.allocate_id();
                debug!(attendance_id = %id, employee_id = %record.employee_id, date = %record.date, status = %record.status, "Adding attendance");
                self.attendances.push(record);
            }
            Command::UpdateAttendance(id, new) => {
                if self.attendance(id).is_none() {
                    return Err(StoreError::NotFound { kind: EntityKind::Attendance, id: id.0 });
                }
                let record = self.build_attendance(id, new)?;
                if let Some(slot) = self.attendances.iter_mut().find(|a| a.id == id) {
                    debug!(attendance_id = %id, "Updating attendance");
                    *slot = record;
                }
            }
            Command::DeleteAttendance(id) => {
                remove_where(&mut self.attendances, |a| a.id == id, EntityKind::Attendance, id.0)?;
                debug!(attendance_id = %id, "Deleted attendance");
            }

            Command::AddLeave(new) => {
                self.check_leave(&new)?;
                let id = LeaveId(self.allocate_id());
                debug!(leave_id = %id, employee_id = %new.employee_id, "Adding leave");
                self.leaves.push(leave_from(id, new));
            }
            Command::UpdateLeave(id, new) => {
                self.check_leave(&new)?;
                let slot = self
                    .leaves
                    .iter_mut()
                    .find(|l| l.id == id)
                    .ok_or(StoreError::NotFound { kind: EntityKind::Leave, id: id.0 })?;
                *slot = leave_from(id, new);
            }
            Command::DeleteLeave(id) => {
                remove_where(&mut self.leaves, |l| l.id == id, EntityKind::Leave, id.0)?;
            }

            Command::AddDepartment(name) => {
                let name = non_empty(name, EntityKind::Department)?;
                let id = DepartmentId(self.allocate_id());
                debug!(department_id = %id, name = %name, "Adding department");
                self.departments.push(Department { id, name });
            }
            Command::UpdateDepartment(id, name) => {
                let name = non_empty(name, EntityKind::Department)?;
                let slot = self
                    .departments
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or(StoreError::NotFound { kind: EntityKind::Department, id: id.0 })?;
                slot.name = name;
            }
            Command::DeleteDepartment(id) => {
                let referenced = self.designations.iter().any(|d| d.department_id == id)
                    || self.employees.iter().any(|e| e.department_id == id);
                if referenced && self.department(id).is_some() {
                    return Err(StoreError::DepartmentInUse(id));
                }
                remove_where(&mut self.departments, |d| d.id == id, EntityKind::Department, id.0)?;
                debug!(department_id = %id, "Deleted department");
            }

            Command::AddDesignation(new) => {
                let new = self.check_designation(new)?;
                let id = DesignationId(self.allocate_id());
                debug!(designation_id = %id, name = %new.name, "Adding designation");
                self.designations.push(Designation {
                    id,
                    name: new.name,
                    department_id: new.department_id,
                });
            }
            Command::UpdateDesignation(id, new) => {
                let new = self.check_designation(new)?;
                if self
                    .employees
                    .iter()
                    .any(|e| e.designation_id == id && e.department_id != new.department_id)
                {
                    return Err(StoreError::DesignationInUse(id));
                }
                let slot = self
                    .designations
                    .iter_mut()
                    .find(|d| d.id == id)
                    .ok_or(StoreError::NotFound { kind: EntityKind::Designation, id: id.0 })?;
                slot.name = new.name;
                slot.department_id = new.department_id;
            }
            Command::DeleteDesignation(id) => {
                if self.employees.iter().any(|e| e.designation_id == id) && self.designation(id).is_some() {
                    return Err(StoreError::DesignationInUse(id));
                }
                remove_where(&mut self.designations, |d| d.id == id, EntityKind::Designation, id.0)?;
            }

            Command::AddStatusLabel(new) => {
                let name = non_empty(new.name, EntityKind::StatusLabel)?;
                let id = StatusLabelId(self.allocate_id());
                self.statuses.push(StatusLabel { id, name, color: new.color });
            }
            Command::UpdateStatusLabel(id, new) => {
                let name = non_empty(new.name, EntityKind::StatusLabel)?;
                let slot = self
                    .statuses
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or(StoreError::NotFound { kind: EntityKind::StatusLabel, id: id.0 })?;
                slot.name = name;
                slot.color = new.color;
            }
            Command::DeleteStatusLabel(id) => {
                remove_where(&mut self.statuses, |s| s.id == id, EntityKind::StatusLabel, id.0)?;
            }
        }

        Ok(())
    }

    fn peek_id(&self) -> u64 {
        self.next_id + 1
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.last_inserted = Some(self.next_id);
        self.next_id
    }

    fn check_employee(&self, new: &NewEmployee) -> Result<(), StoreError> {
        if new.name.trim().is_empty() {
            return Err(StoreError::EmptyName(EntityKind::Employee));
        }
        if self.department(new.department_id).is_none() {
            return Err(StoreError::UnknownDepartment(new.department_id));
        }
        let designation = self
            .designation(new.designation_id)
            .ok_or(StoreError::UnknownDesignation(new.designation_id))?;
        if designation.department_id != new.department_id {
            return Err(StoreError::DesignationOutsideDepartment {
                designation: new.designation_id,
                department: new.department_id,
            });
        }
        Ok(())
    }

    fn check_designation(&self, new: NewDesignation) -> Result<NewDesignation, StoreError> {
        let name = non_empty(new.name, EntityKind::Designation)?;
        if self.department(new.department_id).is_none() {
            return Err(StoreError::UnknownDepartment(new.department_id));
        }
        Ok(NewDesignation { name, department_id: new.department_id })
    }

    fn check_leave(&self, new: &NewLeave) -> Result<(), StoreError> {
        if self.employee(new.employee_id).is_none() {
            return Err(StoreError::UnknownEmployee(new.employee_id));
        }
        if new.end_date < new.start_date {
            return Err(StoreError::InvalidLeavePeriod);
        }
        Ok(())
    }

    /// Resolves the employee, copies the denormalised fields and checks the
    /// clock values of a non-absent record.
    fn build_attendance(&self, id: AttendanceId, new: NewAttendance) -> Result<AttendanceRecord, StoreError> {
        let employee = self
            .employee(new.employee_id)
            .ok_or(StoreError::UnknownEmployee(new.employee_id))?;
        let department = self
            .department_name(employee.department_id)
            .ok_or(StoreError::UnknownDepartment(employee.department_id))?
            .to_string();

        let (time_in, time_out, break_time) = match new.status {
            AttendanceStatus::Absent => (String::new(), String::new(), String::new()),
            AttendanceStatus::Present | AttendanceStatus::Late => {
                let time_in = time::normalize_clock(&new.time_in)
                    .ok_or(StoreError::InvalidTimes("time in is missing or malformed"))?;
                let time_out = time::normalize_clock(&new.time_out)
                    .ok_or(StoreError::InvalidTimes("time out is missing or malformed"))?;
                // Zero-padded HH:MM:SS compares chronologically.
                if time_in >= time_out {
                    return Err(StoreError::InvalidTimes("time out must be after time in"));
                }
                let break_time = if new.break_time.trim().is_empty() {
                    String::new()
                } else {
                    time::normalize_clock(&new.break_time).ok_or(StoreError::InvalidTimes("break time is malformed"))?
                };
                (time_in, time_out, break_time)
            }
        };

        Ok(AttendanceRecord {
            id,
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            department,
            status: new.status,
            date: new.date,
            time_in,
            time_out,
            break_time,
        })
    }
}

fn non_empty(name: String, kind: EntityKind) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyName(kind));
    }
    Ok(trimmed.to_string())
}

fn leave_from(id: LeaveId, new: NewLeave) -> Leave {
    Leave {
        id,
        employee_id: new.employee_id,
        start_date: new.start_date,
        end_date: new.end_date,
        reason: new.reason,
        state: new.state,
    }
}

fn remove_where<T, F>(items: &mut Vec<T>, matches: F, kind: EntityKind, id: u64) -> Result<(), StoreError>
where
    F: Fn(&T) -> bool,
{
    let before = items.len();
    items.retain(|item| !matches(item));
    if items.len() == before {
        return Err(StoreError::NotFound { kind, id });
    }
    Ok(())
}
