//! Attendance report over a date range.
//!
//! Lists the matching records and, with `--stats`, the statistics view:
//! status rates, records per department, the daily trend, the top
//! department and the peak attendance day.

use super::{department_names, load_store, RangeArgs};
use crate::db::attendance::AttendanceRecord;
use crate::libs::{
    aggregate::aggregate,
    config::Config,
    filter::{select, sort_newest_first},
    formatter::report_rows,
    messages::Message,
    report::summarize,
    time,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    range: RangeArgs,

    /// Show statistics after the record list
    #[arg(long)]
    stats: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;
    let (from, to, criteria) = args.range.criteria(&store, &config)?;

    let mut records = select(store.attendances(), &criteria);
    msg_print!(
        Message::ReportHeader {
            from: from.to_string(),
            to: to.to_string(),
        },
        true
    );
    if records.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }
    sort_newest_first(&mut records);
    View::records(&report_rows(records.iter().copied()))?;

    if args.stats {
        let counted = aggregate(&records, &department_names(&store));
        let summary = summarize(&counted);

        msg_print!(Message::ReportStatisticsHeader, true);
        View::statistics(
            &summary,
            &counted.departments_by_count(),
            &counted.trend(config.trend_days),
            total_worked(&records),
        )?;
    }

    Ok(())
}

/// Worked time of all attended records.
fn total_worked(records: &[&AttendanceRecord]) -> Duration {
    records
        .iter()
        .filter(|r| r.status.is_attending())
        .map(|r| time::work_duration(&r.time_in, &r.time_out, &r.break_time))
        .fold(Duration::zero(), |total, worked| total + worked)
}
