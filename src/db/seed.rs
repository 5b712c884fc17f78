//! Demo register used by the command-line front end.
//!
//! Builds five departments, five designations, four status labels, four
//! employees with leave requests, and thirty days of weekday attendance
//! ending at a given date. Attendance statuses are drawn from a seeded
//! generator, so a fixed seed always yields the same register.
//!
//! ## Attendance Mix
//!
//! - 70% Present (09:00 to 18:00)
//! - 20% Late (10:15 to 18:00)
//! - 10% Absent
//! - An employee labelled "On Leave" is absent for the last seven days
//! - Every attended day carries a one-hour break

use super::attendance::NewAttendance;
use super::employees::NewEmployee;
use super::leaves::{LeaveState, NewLeave};
use super::organization::{NewDesignation, NewStatusLabel};
use super::store::{Command, Store};
use super::{DepartmentId, DesignationId, EmployeeId};
use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// Seed used when the configuration does not set one.
pub const DEFAULT_SEED: u64 = 42;

/// Number of calendar days of attendance generated, today included.
pub const SEED_DAYS: i64 = 30;

const ON_LEAVE_STATUS: &str = "On Leave";
const ON_LEAVE_ABSENT_DAYS: i64 = 7;

const PRESENT_SHARE: f64 = 0.7;
const LATE_SHARE: f64 = 0.9;

const DEPARTMENTS: [&str; 5] = ["Engineering", "Human Resources", "Finance", "Marketing", "Operations"];

const DESIGNATIONS: [(&str, &str); 5] = [
    ("Software Engineer", "Engineering"),
    ("Senior Software Engineer", "Engineering"),
    ("HR Manager", "Human Resources"),
    ("Financial Analyst", "Finance"),
    ("Marketing Specialist", "Marketing"),
];

const STATUS_LABELS: [(&str, &str); 4] = [
    ("Active", "green"),
    ("On Leave", "yellow"),
    ("Terminated", "red"),
    ("Probation", "blue"),
];

struct SeedEmployee {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    department: &'static str,
    designation: &'static str,
    join_date: (i32, u32, u32),
    status: &'static str,
    days_present: u32,
    total_leaves: u32,
    remaining_leaves: u32,
}

const EMPLOYEES: [SeedEmployee; 4] = [
    SeedEmployee {
        name: "John Doe",
        email: "john.doe@example.com",
        phone: "123-456-7890",
        address: "123 Main St, City, Country",
        department: "Engineering",
        designation: "Senior Software Engineer",
        join_date: (2022, 1, 15),
        status: "Active",
        days_present: 210,
        total_leaves: 21,
        remaining_leaves: 10,
    },
    SeedEmployee {
        name: "Jane Smith",
        email: "jane.smith@example.com",
        phone: "987-654-3210",
        address: "456 Oak St, City, Country",
        department: "Human Resources",
        designation: "HR Manager",
        join_date: (2021, 8, 10),
        status: "Active",
        days_present: 245,
        total_leaves: 21,
        remaining_leaves: 5,
    },
    SeedEmployee {
        name: "Michael Johnson",
        email: "michael.j@example.com",
        phone: "555-123-4567",
        address: "789 Pine St, City, Country",
        department: "Finance",
        designation: "Financial Analyst",
        join_date: (2023, 2, 20),
        status: "Probation",
        days_present: 95,
        total_leaves: 15,
        remaining_leaves: 15,
    },
    SeedEmployee {
        name: "Emily Wilson",
        email: "emily.wilson@example.com",
        phone: "222-333-4444",
        address: "101 Elm St, City, Country",
        department: "Marketing",
        designation: "Marketing Specialist",
        join_date: (2022, 7, 5),
        status: "On Leave",
        days_present: 180,
        total_leaves: 21,
        remaining_leaves: 0,
    },
];

/// (employee index into `EMPLOYEES`, start, end, reason, state)
const LEAVES: [(usize, (i32, u32, u32), (i32, u32, u32), &str, LeaveState); 4] = [
    (3, (2023, 10, 1), (2023, 10, 7), "Family vacation", LeaveState::Approved),
    (0, (2023, 9, 15), (2023, 9, 16), "Medical appointment", LeaveState::Approved),
    (1, (2023, 10, 20), (2023, 10, 22), "Personal reasons", LeaveState::Approved),
    (2, (2023, 11, 1), (2023, 11, 2), "Family event", LeaveState::Pending),
];

/// Builds the demo register with attendance for the thirty days ending at `today`.
pub fn seeded(today: NaiveDate, seed: u64) -> Result<Store> {
    let mut store = Store::new();

    for name in DEPARTMENTS {
        store.execute(Command::AddDepartment(name.to_string()))?;
    }

    for (name, department) in DESIGNATIONS {
        let department_id = department_id(&store, department)?;
        store.execute(Command::AddDesignation(NewDesignation::new(name, department_id)))?;
    }

    for (name, color) in STATUS_LABELS {
        store.execute(Command::AddStatusLabel(NewStatusLabel::new(name, color)))?;
    }

    let mut employee_ids = Vec::with_capacity(EMPLOYEES.len());
    for employee in &EMPLOYEES {
        let new = NewEmployee::new(
            employee.name,
            employee.email,
            department_id(&store, employee.department)?,
            designation_id(&store, employee.designation)?,
            date(employee.join_date)?,
        )
        .with_contact(employee.phone, employee.address)
        .with_status(employee.status)
        .with_leave_balance(employee.days_present, employee.total_leaves, employee.remaining_leaves);
        store.execute(Command::AddEmployee(new))?;
        employee_ids.push(last_employee_id(&store)?);
    }

    for (index, start, end, reason, state) in LEAVES {
        let employee_id = *employee_ids.get(index).ok_or_else(|| anyhow!("seed leave refers to employee #{}", index))?;
        store.execute(Command::AddLeave(NewLeave::new(employee_id, date(start)?, date(end)?, reason, state)))?;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for offset in 0..SEED_DAYS {
        let day = today - Duration::days(offset);
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        for (employee, &employee_id) in EMPLOYEES.iter().zip(&employee_ids) {
            let roll: f64 = rng.gen();
            let on_leave = employee.status == ON_LEAVE_STATUS && offset < ON_LEAVE_ABSENT_DAYS;

            let attendance = if on_leave || roll > LATE_SHARE {
                NewAttendance::absent(employee_id, day)
            } else if roll > PRESENT_SHARE {
                NewAttendance::late(employee_id, day, "10:15", "18:00", "01:00")
            } else {
                NewAttendance::present(employee_id, day, "09:00", "18:00", "01:00")
            };
            store.execute(Command::AddAttendance(attendance))?;
        }
    }

    debug!(
        employees = store.employees().len(),
        attendances = store.attendances().len(),
        %today,
        seed,
        "Seeded attendance register"
    );

    Ok(store)
}

fn date((year, month, day): (i32, u32, u32)) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid seed date {}-{}-{}", year, month, day))
}

fn department_id(store: &Store, name: &str) -> Result<DepartmentId> {
    store
        .department_by_name(name)
        .map(|d| d.id)
        .ok_or_else(|| anyhow!("seed department '{}' is missing", name))
}

fn designation_id(store: &Store, name: &str) -> Result<DesignationId> {
    store
        .designations()
        .iter()
        .find(|d| d.name == name)
        .map(|d| d.id)
        .ok_or_else(|| anyhow!("seed designation '{}' is missing", name))
}

fn last_employee_id(store: &Store) -> Result<EmployeeId> {
    store
        .employees()
        .last()
        .map(|e| e.id)
        .ok_or_else(|| anyhow!("seed employee was not stored"))
}
