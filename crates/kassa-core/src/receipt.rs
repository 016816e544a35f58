//! # Receipt
//!
//! Accumulates purchased items and unresolved order lines, then renders the
//! receipt text.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Operations                                   │
//! │                                                                         │
//! │  Order line            Processor call            Receipt change         │
//! │  ──────────            ──────────────            ──────────────         │
//! │                                                                         │
//! │  "1 Банан" ──────────► add_product() ──────────► merge or append       │
//! │                                                                         │
//! │  "remove 1 Банан" ───► remove_product() ───────► drop by name          │
//! │                                                                         │
//! │  "2 Ананас" ─────────► add_unresolved() ───────► log + WARN event      │
//! │                                                                         │
//! │  end of stream ──────► render() ───────────────► String                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `code` and keep first-insertion order
//! - Every stored quantity is strictly positive
//! - Removal is by exact name and drops the whole entry

use std::collections::HashMap;
use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Receipt Layout
// =============================================================================

/// Labels used when rendering a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptLayout {
    /// First line of the receipt.
    pub title: String,

    /// Prefix of each running-total line.
    pub total_label: String,

    /// Header of the unresolved-lines section.
    pub unresolved_label: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            title: "Чек:".to_string(),
            total_label: "Сумма:".to_string(),
            unresolved_label: "Не найдено:".to_string(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The receipt being built for one run.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    /// Purchased items in insertion order.
    items: Vec<Product>,

    /// code → position in `items`.
    index: HashMap<String, usize>,

    /// Candidate names that could not be resolved, in encounter order.
    unresolved: Vec<String>,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, merging it into an existing same-item entry.
    ///
    /// ## Errors
    /// - `Validation` when `product.quantity` is not positive
    /// - `ConflictingProduct` when the code is already used by an entry that
    ///   is not the same item (different name, price, ...)
    /// - `AmountOverflow` when the item's cost or the receipt total would leave
    ///   the decimal range; the receipt is left unchanged
    pub fn add_product(&mut self, product: Product) -> CoreResult<()> {
        if product.quantity <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        match self.index.get(&product.code) {
            Some(&pos) => {
                let existing = &self.items[pos];
                if !existing.is_same_item(&product) {
                    return Err(CoreError::ConflictingProduct {
                        code: product.code,
                    });
                }
                let merged = existing.checked_add(&product)?;
                self.ensure_total_fits(&merged, Some(pos))?;
                tracing::debug!(code = %merged.code, quantity = %merged.quantity, "Merged receipt item");
                self.items[pos] = merged;
            }
            None => {
                self.ensure_total_fits(&product, None)?;
                tracing::debug!(code = %product.code, quantity = %product.quantity, "New receipt item");
                self.index.insert(product.code.clone(), self.items.len());
                self.items.push(product);
            }
        }

        Ok(())
    }

    /// Removes every item whose name equals `name`, whatever its quantity.
    ///
    /// Returns how many entries were dropped.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        let removed = before - self.items.len();

        if removed > 0 {
            self.reindex();
            tracing::debug!(name, removed, "Removed receipt items");
        }
        removed
    }

    /// Records an order line that could not be resolved.
    pub fn add_unresolved(&mut self, name: impl Into<String>) {
        let name = name.into();
        tracing::warn!(name = %name, "Unresolved product");
        self.unresolved.push(name);
    }

    /// Sum of all item costs, recomputed on every call.
    ///
    /// Cannot overflow: [`Receipt::add_product`] rejects items that would
    /// push the total out of range.
    pub fn total(&self) -> Money {
        self.items.iter().map(Product::cost).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Looks up an item by product code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.index.get(code).map(|&pos| &self.items[pos])
    }

    /// Unresolved names in encounter order.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the receipt with the default labels.
    pub fn render(&self) -> String {
        self.render_with(&ReceiptLayout::default())
    }

    /// Renders the receipt.
    ///
    /// ## Format
    /// ```text
    /// Чек:
    /// Банан....2.00 210.00*105.00....      ◄─ per item
    /// Сумма: 210.00                         ◄─ running total, per item
    /// Не найдено:                           ◄─ per item, only if any
    /// Ананас
    /// ```
    ///
    /// The total and the unresolved section repeat after every item. With no
    /// items, only the title is written.
    pub fn render_with(&self, layout: &ReceiptLayout) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", layout.title);

        for item in &self.items {
            let _ = writeln!(
                out,
                "{}....{} {}*{}....",
                item.name,
                Money::new(item.quantity),
                item.cost(),
                item.effective_unit_price()
            );
            let _ = writeln!(out, "{} {}", layout.total_label, self.total());

            if !self.unresolved.is_empty() {
                let _ = writeln!(out, "{}", layout.unresolved_label);
                for name in &self.unresolved {
                    let _ = writeln!(out, "{name}");
                }
            }
        }

        out
    }

    /// Checks that `candidate`, stored at `replacing` or appended, keeps every
    /// cost and the total representable.
    fn ensure_total_fits(&self, candidate: &Product, replacing: Option<usize>) -> CoreResult<()> {
        let overflow = || CoreError::AmountOverflow {
            code: candidate.code.clone(),
        };

        let mut total = candidate.checked_cost()?;
        for (pos, item) in self.items.iter().enumerate() {
            if Some(pos) == replacing {
                continue;
            }
            total = total.checked_add(item.cost()).ok_or_else(overflow)?;
        }
        Ok(())
    }

    fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.code.clone(), pos))
            .collect();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
