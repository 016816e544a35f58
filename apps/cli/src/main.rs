//! # kassa
//!
//! Reads `orders.txt`, writes `check.txt`. See `kassa --help`.

use std::process::ExitCode;

use clap::Parser;
use kassa_cli::{run, Args, Settings};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();
    debug!(?args, "Starting kassa");

    match main_inner(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: &Args) -> anyhow::Result<()> {
    let settings = Settings::load(args)?;
    let report = run(&settings)?;

    info!(
        lines = report.summary.lines,
        unresolved = report.summary.unresolved,
        skipped = report.summary.skipped,
        total = %report.total,
        "Receipt successfully generated in {}",
        report.receipt_path.display()
    );
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - Default: INFO (unresolved lines show up as WARN)
/// - `RUST_LOG=debug` - one event per order line
/// - `RUST_LOG=kassa_core=trace` - core crate only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
