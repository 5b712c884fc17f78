use super::load_store;
use crate::libs::{config::Config, messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrgTable {
    Departments,
    Designations,
    Statuses,
}

#[derive(Debug, Args)]
pub struct OrgArgs {
    #[arg(value_enum)]
    table: OrgTable,
}

pub fn cmd(args: OrgArgs) -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;

    match args.table {
        OrgTable::Departments => {
            msg_print!(Message::DepartmentsHeader, true);
            View::departments(&store)
        }
        OrgTable::Designations => {
            msg_print!(Message::DesignationsHeader, true);
            View::designations(&store)
        }
        OrgTable::Statuses => {
            msg_print!(Message::StatusesHeader, true);
            View::statuses(&store)
        }
    }
}
