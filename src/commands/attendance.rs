//! Attendance list with search, filters and paging.
//!
//! Records are listed newest first, ties ordered by employee name.

use super::{known_department, load_store, parse_date};
use crate::libs::{
    config::Config,
    filter::{paginate, select, sort_newest_first, RecordFilter},
    formatter::report_rows,
    messages::Message,
    view::View,
};
use crate::db::attendance::AttendanceStatus;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    /// Case-insensitive part of the employee name
    #[arg(long)]
    search: Option<String>,

    #[arg(short, long)]
    department: Option<String>,

    #[arg(short, long, value_enum)]
    status: Option<AttendanceStatus>,

    /// Single day, `YYYY-MM-DD` or `today`
    #[arg(long)]
    date: Option<String>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

pub fn cmd(args: AttendanceArgs) -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;

    let mut criteria = RecordFilter::new();
    if let Some(search) = &args.search {
        criteria = criteria.search(search);
    }
    if let Some(department) = &args.department {
        criteria = criteria.department(known_department(&store, department)?);
    }
    if let Some(status) = args.status {
        criteria = criteria.status(status);
    }
    if let Some(date) = &args.date {
        criteria = criteria.on(parse_date(date)?);
    }

    let mut records = select(store.attendances(), &criteria);
    if records.is_empty() {
        msg_info!(Message::NoRecordsFound);
        return Ok(());
    }
    sort_newest_first(&mut records);

    let rows = report_rows(records);
    let page = paginate(&rows, args.page, config.page_size);
    if page.page != args.page {
        msg_warning!(Message::PageOutOfRange {
            requested: args.page,
            last: page.page,
        });
    }

    msg_print!(Message::AttendanceHeader, true);
    View::page(&page)
}
