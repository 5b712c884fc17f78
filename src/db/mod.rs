//! In-memory attendance register.
//!
//! All entities live inside a [`store::Store`] value that is built from seed
//! data at start-up and changed only through [`store::Command`] transitions.
//! Nothing is written to disk.
//!
//! ## Modules
//!
//! - [`attendance`]: attendance records and their status
//! - [`employees`]: employee profiles
//! - [`organization`]: departments, designations and employee status labels
//! - [`leaves`]: leave requests
//! - [`store`]: the register itself and its commands
//! - [`seed`]: demo data used by the command-line front end

pub mod attendance;
pub mod employees;
pub mod leaves;
pub mod organization;
pub mod seed;
pub mod store;

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`employees::Employee`].
    EmployeeId
);
entity_id!(
    /// Identifier of an [`attendance::AttendanceRecord`].
    AttendanceId
);
entity_id!(
    /// Identifier of a [`leaves::Leave`].
    LeaveId
);
entity_id!(
    /// Identifier of an [`organization::Department`].
    DepartmentId
);
entity_id!(
    /// Identifier of an [`organization::Designation`].
    DesignationId
);
entity_id!(
    /// Identifier of an [`organization::StatusLabel`].
    StatusLabelId
);
