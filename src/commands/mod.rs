//! Command-line interface.
//!
//! Every subcommand works on the sample attendance generated for the current
//! day from the configured seed, so repeated runs on the same day show the
//! same data.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod export;
pub mod init;
pub mod leaves;
pub mod org;
pub mod report;

use crate::db::attendance::AttendanceStatus;
use crate::db::seed::seeded;
use crate::db::store::Store;
use crate::libs::config::ReportConfig;
use crate::libs::filter::RecordFilter;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show today's attendance overview")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "List attendance records")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Prepare an attendance report")]
    Report(report::ReportArgs),
    #[command(about = "Export an attendance report to a file")]
    Export(export::ExportArgs),
    #[command(about = "List employees")]
    Employees,
    #[command(about = "List leave requests")]
    Leaves,
    #[command(about = "List organization reference data")]
    Org(org::OrgArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Attendance(args) => attendance::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Employees => employees::cmd(),
            Commands::Leaves => leaves::cmd(),
            Commands::Org(args) => org::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}

/// Report range and record criteria shared by `report` and `export`.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// First day of the range, `YYYY-MM-DD` or `today`
    #[arg(long)]
    from: Option<String>,

    /// Last day of the range, `YYYY-MM-DD` or `today`
    #[arg(long, default_value = "today")]
    to: String,

    /// Only records of this department
    #[arg(short, long)]
    department: Option<String>,

    /// Only records with this status
    #[arg(short, long, value_enum)]
    status: Option<AttendanceStatus>,
}

impl RangeArgs {
    pub fn criteria(&self, store: &Store, config: &ReportConfig) -> Result<(NaiveDate, NaiveDate, RecordFilter)> {
        let to = parse_date(&self.to)?;
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let (from, to) = report_range(from, to, config.default_range_days)?;

        let mut criteria = RecordFilter::new().between(from, to);
        if let Some(department) = &self.department {
            criteria = criteria.department(known_department(store, department)?);
        }
        if let Some(status) = self.status {
            criteria = criteria.status(status);
        }

        Ok((from, to, criteria))
    }
}

/// Resolves the report range. Without `from`, the range starts
/// `range_days` days before `to`, both ends included.
pub fn report_range(from: Option<NaiveDate>, to: NaiveDate, range_days: u32) -> Result<(NaiveDate, NaiveDate)> {
    let from = match from {
        Some(from) => from,
        None => to
            .checked_sub_signed(Duration::days(i64::from(range_days)))
            .ok_or_else(|| msg_error_anyhow!(Message::RangeTooLong(range_days)))?,
    };
    if from > to {
        return Err(msg_error_anyhow!(Message::InvalidDateRange {
            from: from.to_string(),
            to: to.to_string(),
        }));
    }

    Ok((from, to))
}

/// Parses `YYYY-MM-DD`, or `today` in any case.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Sample data for today.
pub fn load_store(config: &ReportConfig) -> Result<Store> {
    seeded(today(), config.seed())
}

/// `name` when the store has a department of that name.
pub fn known_department<'a>(store: &Store, name: &'a str) -> Result<&'a str> {
    match store.department_by_name(name) {
        Some(_) => Ok(name),
        None => Err(msg_error_anyhow!(Message::UnknownDepartment(name.to_string()))),
    }
}

pub fn department_names(store: &Store) -> Vec<&str> {
    store.departments().iter().map(|d| d.name.as_str()).collect()
}
