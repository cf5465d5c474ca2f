//! Service entry point for the content-type HTTP endpoint.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use urlprobe::server::{self, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use urlprobe::{ResolutionEngine, configure_probe_http_timeouts};

/// Serve the content-type resolution endpoint over HTTP.
///
/// Exposes `GET /health` and `GET /content-type?url=<URL>`, sharing the
/// resolution engine the urlprobe CLI uses.
#[derive(Parser, Debug)]
#[command(name = "urlprobe-server")]
#[command(author, version, about)]
struct Args {
    /// Host or address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Probe request timeout in seconds (1-120)
    #[arg(short = 't', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=120))]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "server arguments parsed");

    configure_probe_http_timeouts(args.timeout, args.timeout);
    let engine = ResolutionEngine::new()?;

    server::run(
        ServerConfig {
            host: args.host,
            port: args.port,
        },
        engine,
    )
    .await
}
