//! CLI entry point for the urlprobe tool.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use urlprobe::{ResolutionEngine, configure_probe_http_timeouts};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    configure_probe_http_timeouts(args.timeout, args.timeout);
    let engine = ResolutionEngine::new()?;

    let redirected = engine.resolve_redirect(&args.url).await?;
    let final_url = match redirected {
        Some(target) => {
            info!(original = %args.url, target = %target, "following redirect target");
            target
        }
        None => args.url.clone(),
    };

    match engine.resolve_content_type(&final_url).await {
        Ok(content_type) => {
            println!("{final_url} {content_type}");
            Ok(())
        }
        // Soft failure: the probe succeeded but the server declared no type.
        Err(error) if error.is_soft() => {
            println!("{final_url} (no Content-Type found)");
            debug!(%error, "content type missing");
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
