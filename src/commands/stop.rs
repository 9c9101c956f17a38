use crate::{api::TrackingTime, libs::config::Config, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Task id to stop tracking
    #[arg(required = true)]
    id: i64,
}

/// Stops tracking the given task.
pub async fn cmd(stop_args: StopArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::read_from(config_path)?.tracking_time()?;
    let api = TrackingTime::new(&config);

    let message = api.stop_tracking(stop_args.id).await?;
    msg_print!(message);

    Ok(())
}
