//! Sales Report CLI
//!
//! Command-line interface for generating a per-seller sales report from a
//! JSON dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data.json > report.json
//! cargo run -- --format csv data.json > report.csv
//! cargo run -- --format csv --top 5 --on-missing skip data.json > report.csv
//! RUST_LOG=debug cargo run -- data.json
//! ```
//!
//! The report is written to stdout; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid input, unknown seller or SKU, etc.)

use sales_report::cli;
use sales_report::runner;
use std::process;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_report_config();

    let mut output = std::io::stdout();
    if let Err(e) = runner::generate_report(&args.input_file, args.format, config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
