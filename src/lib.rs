//! # Presence - attendance register and reporting
//!
//! A command-line utility for keeping employee attendance, computing work
//! hours and producing attendance statistics.
//!
//! ## Features
//!
//! - **Attendance Register**: Employees, attendance records, leaves and organisation data
//! - **Work Hours**: Clock arithmetic over check-in, check-out and break times
//! - **Filtering**: Department, status, date range and name search with paging
//! - **Statistics**: Status distribution, department counts, daily trends
//! - **Dashboard**: Daily attendance overview for the whole company
//! - **Data Export**: Export filtered reports to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use presence::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
