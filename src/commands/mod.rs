pub mod get;
pub mod init;
pub mod start;
pub mod stop;
pub mod sync;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the currently tracked task")]
    Get,
    #[command(about = "Start tracking a task", arg_required_else_help = true)]
    Start(start::StartArgs),
    #[command(about = "Stop tracking a task", arg_required_else_help = true)]
    Stop(stop::StopArgs),
    #[command(about = "Sync elapsed time for the tracked task")]
    Sync,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config_path = cli.config.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args, config_path),
            Commands::Get => get::cmd(config_path).await,
            Commands::Start(args) => start::cmd(args, config_path).await,
            Commands::Stop(args) => stop::cmd(args, config_path).await,
            Commands::Sync => sync::cmd(config_path).await,
        }
    }
}
