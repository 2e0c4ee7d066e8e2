//! CLI entrypoint for `mcmeta-inspect`.

use clap::Parser;
use mcmeta_inspect::cli::Args;
use mcmeta_inspect::error::InspectError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InspectError> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let stdout = std::io::stdout();
    mcmeta_inspect::run(&args, &mut stdout.lock())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
