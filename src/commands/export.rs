use super::{load_store, today, RangeArgs};
use crate::libs::{
    config::Config,
    export::{ExportFormat, Exporter},
    filter::{select, sort_newest_first},
    formatter::report_rows,
    messages::Message,
};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file, `attendance_report_<date>.<ext>` when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    range: RangeArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;
    let (_, _, criteria) = args.range.criteria(&store, &config)?;

    let mut records = select(store.attendances(), &criteria);
    sort_newest_first(&mut records);
    let rows = report_rows(records);

    msg_info!(Message::ExportingRecords(rows.len()));
    let path = Exporter::new(args.format, args.output, today()).export(&rows)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
