//! Organisation reference data: departments, designations and the labels
//! used for an employee's employment status.

use super::{DepartmentId, DesignationId, StatusLabelId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl AsRef<str> for Department {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// A job title. Always belongs to an existing department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation {
    pub id: DesignationId,
    pub name: String,
    pub department_id: DepartmentId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDesignation {
    pub name: String,
    pub department_id: DepartmentId,
}

impl NewDesignation {
    pub fn new(name: &str, department_id: DepartmentId) -> Self {
        Self { name: name.to_string(), department_id }
    }
}

/// Employee status label, e.g. "Active" shown in green.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabel {
    pub id: StatusLabelId,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStatusLabel {
    pub name: String,
    pub color: String,
}

impl NewStatusLabel {
    pub fn new(name: &str, color: &str) -> Self {
        Self { name: name.to_string(), color: color.to_string() }
    }
}
