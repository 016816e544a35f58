//! # kassa-cli
//!
//! File-based shell around [`kassa_core`].
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Settings ─────────── flags > KASSA_* env > kassa.toml > defaults   │
//! │  2. Catalog ──────────── built-in list, or --catalog JSON              │
//! │  3. Orders ───────────── read file, split into lines                   │
//! │  4. process_lines ────── kassa-core                                    │
//! │  5. Receipt ──────────── render with layout, write file                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod seed;
pub mod settings;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use kassa_core::{process_lines, Money, ProcessSummary, Receipt};
use tracing::info;

pub use args::Args;
pub use settings::{Settings, SettingsError};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: ProcessSummary,
    pub total: Money,
    pub receipt_path: PathBuf,
}

/// Reads the orders, builds the receipt and writes it out.
pub fn run(settings: &Settings) -> anyhow::Result<RunReport> {
    let catalog = seed::build_catalog(settings.catalog_path.as_deref())?;

    let orders = fs::read_to_string(&settings.orders_path).with_context(|| {
        format!(
            "Failed to open the orders file {}",
            settings.orders_path.display()
        )
    })?;
    info!(path = %settings.orders_path.display(), "Processing orders");

    let mut receipt = Receipt::new();
    let summary = process_lines(orders.lines(), &catalog, &mut receipt)
        .context("Order processing failed")?;

    fs::write(&settings.receipt_path, receipt.render_with(&settings.layout)).with_context(
        || {
            format!(
                "Failed to write the receipt {}",
                settings.receipt_path.display()
            )
        },
    )?;

    Ok(RunReport {
        summary,
        total: receipt.total(),
        receipt_path: settings.receipt_path.clone(),
    })
}
