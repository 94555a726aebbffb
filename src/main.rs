//! ipsweep binary entry point.

use clap::Parser;
use ipsweep::cli::{self, Args};
use ipsweep::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "ipsweep=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(args).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
