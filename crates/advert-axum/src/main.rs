//! `advert-server` binary.

use std::path::PathBuf;

use advert_axum::{ServerConfig, init_tracing, shutdown_signal, start_server};
use clap::Parser;
use tokio_util::sync::CancellationToken;

/// HTTP JSON service for adverts.
#[derive(Parser, Debug)]
#[command(name = "advert-server", version, about)]
struct Cli {
    /// Path to the JSON config file. Missing file means defaults.
    #[arg(long, env = "ADVERTS_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Port to listen on (overrides config and environment).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ServerConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let _guard = init_tracing(&config.log_dir)?;
    tracing::info!(config = ?config, "starting advert server");

    let shutdown = CancellationToken::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    start_server(config, shutdown).await
}
