// src/main.rs
//! User Registry Server Entry Point
//! This binary is responsible for starting the API server.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use user_registry::api::server::RegistryServer;
use user_registry::core::config::ServerConfig;

#[derive(Parser)]
#[command(name = "user-registry")]
#[command(about = "In-memory user registry server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// TOML config file (falls back to CONFIG_PATH)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind the server to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the server to
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;

    info!("Starting User Registry v{}", env!("CARGO_PKG_VERSION"));

    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("Starting server on {}", config.bind_addr());
    RegistryServer::new(config).start().await
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,h2=info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
