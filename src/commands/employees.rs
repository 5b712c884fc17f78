use super::load_store;
use crate::libs::{config::Config, messages::Message, view::View};
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;

    if store.employees().is_empty() {
        msg_warning!(Message::NoEmployees);
        return Ok(());
    }

    msg_print!(Message::EmployeesHeader, true);
    View::employees(&store)
}
