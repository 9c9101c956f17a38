//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that collects the TrackingTime
//! credentials and user id needed by every other command.

use crate::{
    libs::{config::Config, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Runs the configuration wizard, or removes the stored configuration
/// when `--delete` is used.
pub fn cmd(init_args: InitArgs, config_path: Option<&Path>) -> Result<()> {
    if init_args.delete {
        if Config::delete(config_path)? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_error!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    Config::init(config_path)?.save_to(config_path)?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
