//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Resolve the effective content type of a URL without downloading its body.
///
/// urlprobe follows a single redirect hop (if present) and reports the
/// Content-Type the final resource declares.
#[derive(Parser, Debug)]
#[command(name = "urlprobe")]
#[command(author, version, about)]
pub struct Args {
    /// The URL to resolve
    pub url: String,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Probe request timeout in seconds (1-120)
    #[arg(short = 't', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=120))]
    pub timeout: u64,
}
