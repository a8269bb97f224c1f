mod serve;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use viewer_count_core::ServerConfig;

#[derive(Parser)]
#[command(name = "viewer-count")]
#[command(about = "Serve aggregate viewer counts from PostgreSQL over HTTP", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file: {"port": <1-65535>, "db_connection_string": "<postgres url>"}
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(&cli.config)?;
    serve::run(config).await
}
