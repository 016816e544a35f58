//! # kassa-core: Pure Business Logic for Kassa
//!
//! This crate turns free-text order lines into an itemized receipt against a
//! fixed product catalog. It contains no I/O: lines come in as strings, the
//! receipt goes out as a string.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Kassa Data Flow                                │
//! │                                                                         │
//! │  orders.txt ──► kassa-cli (reads lines) ──────────────┐                │
//! │                                                       │                │
//! │  ┌────────────────────────────────────────────────────▼────────────┐   │
//! │  │               ★ kassa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   "2 Банан."                                                    │   │
//! │  │       │                                                         │   │
//! │  │       ▼                                                         │   │
//! │  │   interpreter ──► ParsedLine { Add, 2, "Банан" }                │   │
//! │  │       │                                                         │   │
//! │  │       ▼                                                         │   │
//! │  │   catalog.resolve("Банан", 2) ──► Product │ NotFound │ Stock    │   │
//! │  │       │                                                         │   │
//! │  │       ▼                                                         │   │
//! │  │   receipt.add_product / remove_product / add_unresolved         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • DETERMINISTIC                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                                ▼                                        │
//! │  check.txt ◄── kassa-cli (writes receipt.render())                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category)
//! - [`money`] - Decimal money value with two-place display
//! - [`catalog`] - Read-only product catalog with substring lookup
//! - [`interpreter`] - Order line parsing heuristic
//! - [`receipt`] - Receipt accumulator and renderer
//! - [`processor`] - Line-by-line orchestration
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog seed validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kassa_core::{process_lines, Catalog, Category, Product, Receipt};
//! use rust_decimal::Decimal;
//!
//! let banana = Product::new(
//!     "001",
//!     "Банан",
//!     Category::Fruits,
//!     Decimal::new(105, 0),
//!     Decimal::ONE,
//!     Decimal::new(100, 0),
//! )
//! .unwrap();
//! let catalog = Catalog::new(vec![banana]).unwrap();
//!
//! let mut receipt = Receipt::new();
//! process_lines(["1 Банан", "1 Банан"], &catalog, &mut receipt).unwrap();
//!
//! assert_eq!(receipt.total().to_string(), "210.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod interpreter;
pub mod money;
pub mod processor;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use interpreter::{parse_line, Operation, ParsedLine};
pub use money::Money;
pub use processor::{process_line, process_lines, LineOutcome, ProcessSummary};
pub use receipt::{Receipt, ReceiptLayout};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Candidate name used when an order line has no digit to anchor extraction.
pub const UNKNOWN_PRODUCT_NAME: &str = "unknown";

/// Substrings that turn an order line into a removal.
pub const REMOVE_KEYWORDS: [&str; 2] = ["remove", "delete"];

/// Maximum length of a product code.
pub const MAX_CODE_LEN: usize = 50;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;
