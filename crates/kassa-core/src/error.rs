//! # Error Types
//!
//! Domain-specific error types for kassa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kassa-core errors (this file)                                         │
//! │  ├── CoreError        - Lookup misses and arithmetic violations        │
//! │  └── ValidationError  - Catalog seed validation failures               │
//! │                                                                         │
//! │  kassa-cli errors (binary)                                             │
//! │  └── anyhow::Error    - I/O and config failures with context           │
//! │                                                                         │
//! │  Routine:  ProductNotFound, InsufficientStock → unresolved line        │
//! │  Fatal:    MismatchedProduct, InsufficientQuantity, ConflictingProduct │
//! │            AmountOverflow                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog entry's name contains the query.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The matched catalog entry is worth less than the requested amount.
    ///
    /// ## When This Occurs
    /// ```text
    /// Order line: "5 Помидор"
    ///      │
    ///      ▼
    /// catalog.resolve("Помидор", 5)
    ///      │
    ///      ▼
    /// entry cost (unit_price × discount × stock) < 5 ?
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Помидор", available: 0.00, requested: 5 }
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: Money,
        requested: Decimal,
    },

    /// Arithmetic between two products with different codes.
    #[error("Cannot combine different products: {left} and {right}")]
    MismatchedProduct { left: String, right: String },

    /// Subtraction would leave a negative quantity.
    #[error("Not enough quantity of {code} to subtract: available {available}, requested {requested}")]
    InsufficientQuantity {
        code: String,
        available: Decimal,
        requested: Decimal,
    },

    /// A receipt entry already uses this code for a different product.
    #[error("Receipt already holds a different product under code {code}")]
    ConflictingProduct { code: String },

    /// A cost, quantity or total does not fit in a decimal.
    #[error("Amount for {code} exceeds the decimal range")]
    AmountOverflow { code: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for lookup misses, which the processor downgrades to
    /// unresolved lines instead of failing the run.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            CoreError::ProductNotFound(_) | CoreError::InsufficientStock { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog seeds.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Decimal value is outside its allowed range.
    #[error("{field} must be in {range}")]
    OutOfRange { field: String, range: String },

    /// Invalid format (e.g., forbidden characters in a code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
