use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tsglot::cli::{Arguments, ExitStatus};

/// Environment variable that overrides the log filter (e.g. `TSGLOT_LOG=tsglot=trace`).
const LOG_ENV: &str = "TSGLOT_LOG";

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match tsglot::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
