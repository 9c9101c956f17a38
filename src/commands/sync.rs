use crate::{
    api::TrackingTime,
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use std::path::Path;

/// Syncs elapsed time for the active task and prints the updated duration.
pub async fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::read_from(config_path)?.tracking_time()?;
    let api = TrackingTime::new(&config);

    let mut task = match api.active_task().await? {
        Some(task) => task,
        None => {
            msg_print!(Message::NoActiveTasks);
            return Ok(());
        }
    };

    let message = api.sync_task(&mut task).await?;
    View::sync(&message, &task.event.formated_duration);

    Ok(())
}
