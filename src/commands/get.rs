use crate::{
    api::TrackingTime,
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use std::path::Path;

/// Shows the task currently being tracked by the configured user.
pub async fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::read_from(config_path)?.tracking_time()?;
    let api = TrackingTime::new(&config);

    match api.active_task().await? {
        Some(task) => View::active_task(&task),
        None => msg_print!(Message::NoActiveTasks),
    }

    Ok(())
}
