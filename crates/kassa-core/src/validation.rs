//! # Validation Module
//!
//! Validation rules for catalog seed data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field presence, decimal syntax                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Product::new / Catalog::new                                  │
//! │  └── THIS MODULE: price, discount, stock and code rules                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog is trusted for the rest of the run                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kassa_core::validation::{validate_code, validate_discount};
//! use rust_decimal::Decimal;
//!
//! validate_code("001").unwrap();
//! assert!(validate_discount(Decimal::ZERO).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_CODE_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_CODE_LEN`] characters
/// - Only alphanumeric characters, hyphens, underscores
pub fn validate_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.chars().count() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// Names are matched by substring, so surrounding whitespace is significant
/// and is not trimmed from the stored value; only blank names are rejected.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price: must be strictly positive.
pub fn validate_unit_price(price: Decimal) -> ValidationResult<()> {
    if price <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "unit_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount factor: must lie in (0, 1].
///
/// A factor of 1 means no discount, 0.9 means 10% off.
pub fn validate_discount(discount: Decimal) -> ValidationResult<()> {
    if discount <= Decimal::ZERO || discount > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            range: "(0, 1]".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity: zero is allowed (sold out), negative is not.
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Rejects products whose `unit_price × discount × quantity` overflows.
pub fn validate_cost(product: &Product) -> ValidationResult<()> {
    if product.checked_cost().is_err() {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            range: "the decimal range".to_string(),
        });
    }

    Ok(())
}

/// Runs every field rule against a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_code(&product.code)?;
    validate_product_name(&product.name)?;
    validate_unit_price(product.unit_price)?;
    validate_discount(product.discount)?;
    validate_quantity(product.quantity)?;
    validate_cost(product)
}

// =============================================================================
// Unit Tests
// =============================================================================
