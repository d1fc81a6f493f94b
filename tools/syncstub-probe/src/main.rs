//! Syncstub probe — drives a live stub through the client's call sequence.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p syncstub-probe -- --base-url http://localhost:8000
//!
//! # Stub mounted under a prefix with a shorter fail delay
//! cargo run -p syncstub-probe -- --base-url http://localhost:8000/runelite --delay-floor-ms 200
//! ```
//!
//! Run it against a freshly started stub: the submission steps assume the
//! next submission is the first one. Exits 0 when every step passes, 1 otherwise.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use syncstub_probe::reporter::Reporter;
use syncstub_probe::scenario::Probe;

#[derive(Parser)]
#[command(about = "Check a running syncstub against the client's expectations")]
struct Args {
    /// Base URL of the stub, including any route prefix (e.g. http://localhost:8000)
    #[arg(long)]
    base_url: String,

    /// Minimum time a rejected submission must be held, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_floor_ms: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    println!("Probing {}", args.base_url);
    println!();

    let probe = Probe::new(&args.base_url, Duration::from_millis(args.delay_floor_ms));
    let mut reporter = Reporter::new();
    for result in probe.run().await {
        reporter.record(&result);
    }
    reporter.print_summary();

    Ok(reporter.exit_code())
}
