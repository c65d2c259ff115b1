//! pwd-meter-web: serves the password strength form.
//!
//! Usage:
//!   pwd-meter-web [--addr 127.0.0.1:8501] [--port 8501]
//!
//! Environment variables:
//!   PWD_METER_ADDR - Address to bind (default: 127.0.0.1:8501)
//!   PWD_METER_PORT - Port override
//!   RUST_LOG       - Log filter (default: info)

use clap::Parser;
use pwd_meter::config::{ConfigError, ServerConfig};
use pwd_meter::web;
use tracing_subscriber::EnvFilter;

/// Password strength checker web form
#[derive(Parser)]
#[command(name = "pwd-meter-web", about = "Password strength checker web form")]
struct Args {
    #[arg(long, help = "Address to bind (overrides PWD_METER_ADDR)")]
    addr: Option<String>,

    #[arg(long, help = "Port to listen on (overrides PWD_METER_PORT)")]
    port: Option<String>,
}

/// A flag wins over its environment variable, which is then ignored.
fn resolve_config(args: &Args) -> Result<ServerConfig, ConfigError> {
    ServerConfig::resolve(args.addr.as_deref(), args.port.as_deref())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = web::run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
