//! Rust ATM CLI
//!
//! Interactive ATM terminal simulator reading commands from standard input.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --pin 1234 --initial-balance 500
//! cargo run -- --deposit-mode accumulate --max-retries 5
//! RUST_LOG=rust_atm_cli=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Exit command, or declined to perform another operation
//! - 1: PIN lockout, too few arguments, or retry limit reached

use rust_atm_cli::cli;
use rust_atm_cli::Session;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Diagnostics go to stderr; stdout carries only the conversation
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(args.to_session_config(), stdin.lock(), io::stdout());

    let end = session.run();
    process::exit(end.exit_code());
}
