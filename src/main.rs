use anyhow::Result;
use tracing_subscriber::EnvFilter;
use ttrack::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Messages are routed through tracing only when debug logging is on.
    if std::env::var("TTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
