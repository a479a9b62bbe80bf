use std::env;
use std::error::Error;
use std::io;
use std::process;

use payment_queries::run;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
/// Verbosity is taken from `RUST_LOG`, defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run -- payments.csv".into());
    }
    run(&args[1], io::stdout())
}
