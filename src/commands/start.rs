use crate::{api::TrackingTime, libs::config::Config, msg_print};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Task id to start tracking
    #[arg(required = true)]
    id: i64,
}

/// Starts tracking the given task; any running task is stopped server-side.
pub async fn cmd(start_args: StartArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::read_from(config_path)?.tracking_time()?;
    let api = TrackingTime::new(&config);

    let message = api.start_tracking(start_args.id).await?;
    msg_print!(message);

    Ok(())
}
