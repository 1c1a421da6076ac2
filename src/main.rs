use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trailmap::{Config, Server};

/// Serve the trailmap demo site.
///
/// Logging follows `RUST_LOG` (default `info`), e.g.
/// `RUST_LOG=trailmap=debug` to see content-tree misses.
#[derive(Parser)]
#[command(name = "trailmap", version)]
struct Cli {
    /// TOML config file; every key is optional
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overriding `addr` from the config
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    match &cli.config {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file, using defaults"),
    }
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }

    let app = trailmap::app(&config);
    match Server::bind(config.addr).serve(app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
