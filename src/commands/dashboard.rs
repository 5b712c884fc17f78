use super::{load_store, parse_date};
use crate::libs::{
    config::Config,
    dashboard::{dashboard, MAX_TREND_DAYS},
    messages::Message,
    view::View,
};
use crate::{msg_bail_anyhow, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Day to show, `YYYY-MM-DD` or `today`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Calendar days in the attendance trend
    #[arg(long)]
    days: Option<u32>,
}

pub fn cmd(args: DashboardArgs) -> Result<()> {
    let config = Config::read()?.report();
    let date = parse_date(&args.date)?;
    let store = load_store(&config)?;

    let days = args.days.unwrap_or(config.dashboard_days);
    if days > MAX_TREND_DAYS {
        msg_bail_anyhow!(Message::TrendTooLong {
            requested: days,
            max: MAX_TREND_DAYS,
        });
    }

    let summary = dashboard(&store, date, days);
    if summary.total_employees == 0 {
        msg_warning!(Message::NoEmployees);
    }

    msg_print!(Message::DashboardHeader(date.format("%B %-d, %Y").to_string()), true);
    View::dashboard(&summary)
}
