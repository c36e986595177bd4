//! Cash-Flow Ledger CLI
//!
//! Command-line interface that loads payables and receivables from a CSV file and
//! reports the resulting cash-flow figures.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- entries.csv > summary.csv
//! cargo run -- --opening-balance 1000 --period 2026-10 entries.csv
//! cargo run -- --today 2026-10-18 --report entries entries.csv
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every engine mutation.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable)

use cashflow_ledger::core::{Clock, FixedClock, SystemClock};
use cashflow_ledger::{cli, logging, LedgerPipeline};
use std::process;

fn main() {
    logging::init();

    let args = cli::parse_args();

    // One date for the whole run, so every row is judged against the same "today"
    let today = args.today.unwrap_or_else(|| SystemClock.today());

    let pipeline = LedgerPipeline::new(FixedClock(today))
        .with_opening_balance(args.opening_balance())
        .with_period(args.period)
        .with_report(args.report.clone());

    let mut output = std::io::stdout();
    if let Err(e) = pipeline.process(&args.input_file, &mut output) {
        tracing::error!(error = %e, "processing failed");
        process::exit(1);
    }
}
