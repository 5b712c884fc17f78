use super::load_store;
use crate::libs::{config::Config, messages::Message, view::View};
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?.report();
    let store = load_store(&config)?;

    if store.leaves().is_empty() {
        msg_info!(Message::NoLeaves);
        return Ok(());
    }

    msg_print!(Message::LeavesHeader, true);
    View::leaves(&store)
}
