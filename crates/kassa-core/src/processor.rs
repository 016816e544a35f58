//! # Order Processor
//!
//! Runs each order line through interpreter → catalog → receipt.
//!
//! ## Per-Line Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line ──► parse_line ──► catalog.resolve(name, qty)                     │
//! │                               │                                         │
//! │              ┌────────────────┼────────────────────┐                    │
//! │              ▼                ▼                    ▼                    │
//! │           Ok + Add         Ok + Remove        NotFound / Stock          │
//! │              │                │                    │                    │
//! │   add_product(qty)   remove_product(name)   add_unresolved(name)       │
//! │   (qty 0: skipped)                                                      │
//! │                                                                         │
//! │  Lookup misses never stop the run. Arithmetic violations do.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::interpreter::{parse_line, Operation};
use crate::receipt::Receipt;

/// What happened to a single order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LineOutcome {
    /// The product was added (or merged) with this quantity.
    Added { code: String, quantity: Decimal },

    /// `count` receipt entries named `name` were dropped.
    Removed { name: String, count: usize },

    /// The candidate name was recorded as unresolved.
    Unresolved { name: String },

    /// The product was found but the line asked for nothing (quantity 0).
    Skipped { name: String },
}

/// Counters for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub lines: usize,
    pub added: usize,
    pub removed: usize,
    pub unresolved: usize,
    pub skipped: usize,
}

impl ProcessSummary {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Added { .. } => self.added += 1,
            LineOutcome::Removed { .. } => self.removed += 1,
            LineOutcome::Unresolved { .. } => self.unresolved += 1,
            LineOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Processes one order line against the catalog.
///
/// An added product carries the quantity the line asked for, not the
/// catalog's stock. A resolved add line with quantity 0 leaves the receipt
/// untouched and is reported as `Skipped`.
///
/// ## Errors
/// Only arithmetic contract violations from the receipt
/// (`MismatchedProduct`, `InsufficientQuantity`, `ConflictingProduct`,
/// `AmountOverflow`).
pub fn process_line(line: &str, catalog: &Catalog, receipt: &mut Receipt) -> CoreResult<LineOutcome> {
    let parsed = parse_line(line);

    let product = match catalog.resolve(&parsed.candidate_name, parsed.quantity) {
        Ok(product) => product,
        Err(err) if err.is_lookup_miss() => {
            tracing::debug!(line = %parsed.raw, error = %err, "Order line not resolved");
            receipt.add_unresolved(parsed.candidate_name.clone());
            return Ok(LineOutcome::Unresolved {
                name: parsed.candidate_name,
            });
        }
        Err(err) => return Err(err),
    };

    let outcome = match parsed.operation {
        Operation::Remove => {
            let count = receipt.remove_product(&parsed.candidate_name);
            LineOutcome::Removed {
                name: parsed.candidate_name,
                count,
            }
        }
        Operation::Add if parsed.quantity.is_zero() => {
            tracing::debug!(line = %parsed.raw, "Zero quantity, nothing to add");
            LineOutcome::Skipped {
                name: parsed.candidate_name,
            }
        }
        Operation::Add => {
            let code = product.code.clone();
            receipt.add_product(product.with_quantity(parsed.quantity))?;
            LineOutcome::Added {
                code,
                quantity: parsed.quantity,
            }
        }
    };

    tracing::debug!(line = %parsed.raw, ?outcome, "Order line processed");
    Ok(outcome)
}

/// Processes every line in order.
///
/// ## Example
/// ```rust
/// use kassa_core::{process_lines, Catalog, Receipt};
///
/// let catalog = Catalog::default();
/// let mut receipt = Receipt::new();
/// let summary = process_lines(["1 Банан", "no digits"], &catalog, &mut receipt).unwrap();
///
/// assert_eq!(summary.lines, 2);
/// assert_eq!(summary.unresolved, 2);
/// assert_eq!(receipt.unresolved(), ["Банан", "unknown"]);
/// ```
pub fn process_lines<I, S>(lines: I, catalog: &Catalog, receipt: &mut Receipt) -> CoreResult<ProcessSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = ProcessSummary::default();
    for line in lines {
        let outcome = process_line(line.as_ref(), catalog, receipt)?;
        summary.record(&outcome);
    }

    tracing::info!(
        lines = summary.lines,
        added = summary.added,
        removed = summary.removed,
        unresolved = summary.unresolved,
        skipped = summary.skipped,
        "Order processing complete"
    );
    Ok(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================
