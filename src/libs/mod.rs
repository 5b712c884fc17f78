//! Core library modules for the presence application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Attendance Analytics**: Time arithmetic, filtering, counting, report figures, dashboard
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust
//! use presence::libs::filter::{filter, RecordFilter};
//! use presence::libs::report::assemble;
//! use presence::db::attendance::AttendanceRecord;
//!
//! let records: Vec<AttendanceRecord> = Vec::new();
//! let selected = filter(&records, &RecordFilter::new().department("Engineering"));
//! let summary = assemble(&selected, &["Engineering"]);
//! assert_eq!(summary.total, 0);
//! ```

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod report;
pub mod time;
pub mod view;
