use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use sift_core::persist::{self, Format};
use sift_server::build_app;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Serve ranked search over a persisted term-frequency index", long_about = None)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0:9001")]
    addr: String,
    /// Index format to load: json, bin
    #[arg(long, default_value = "json")]
    format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let format: Format = args.format.parse()?;
    let index = persist::load(format, Path::new("."))?;
    tracing::info!(docs = index.len(), file = format.file_name(), "loaded index");

    let app = build_app(index)?;
    let addr: SocketAddr = args.addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
