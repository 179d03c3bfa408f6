// nct: Application Entry Point
//
// Parses CLI arguments, initializes structured logging on stderr (so it
// never mixes with command output and never includes passphrases), and
// dispatches to the command handler. A single-threaded runtime is enough:
// the workflow only ever waits on one RPC call, prompt or editor at a time.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nct::cli::{Cli, execute};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // RUST_LOG=nct=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nct=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(code) => code,
        Err(e) if e.is_fatal() => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
