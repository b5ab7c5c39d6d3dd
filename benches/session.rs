//! Benchmark suite for scripted sessions
//!
//! Times complete in-process sessions using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use rust_atm_cli::core::{Session, SessionConfig};
use rust_atm_cli::io::tokenize;
use std::io::Cursor;

fn main() {
    divan::main();
}

/// Build a script of `operations` deposit/withdraw/balance rounds ending in exit
fn script(operations: usize) -> String {
    let mut script = String::new();
    for i in 0..operations {
        let line = match i % 3 {
            0 => "-d 1000",
            1 => "-w 10",
            _ => "-b",
        };
        script.push_str("0000\n");
        script.push_str(line);
        script.push_str("\ny\n");
    }
    script.push_str("0000\n-e\n");
    script
}

fn run(script: &str) {
    let mut session = Session::new(
        SessionConfig::default(),
        Cursor::new(script.as_bytes()),
        Vec::new(),
    );
    divan::black_box(session.run());
}

/// Sessions of 1, 100 and 10,000 operations
#[divan::bench(args = [1, 100, 10_000])]
fn session(bencher: divan::Bencher, operations: usize) {
    let script = script(operations);
    bencher.bench_local(|| run(&script));
}

/// Tokenizing a command line
#[divan::bench]
fn tokenize_command() {
    divan::black_box(tokenize(divan::black_box("  --withdraw \t 250  \n")));
}
