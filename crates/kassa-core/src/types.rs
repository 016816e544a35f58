//! # Domain Types
//!
//! Core domain types used throughout Kassa.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────┐                    │
//! │  │      Product        │        │    Category     │                    │
//! │  │  ─────────────────  │        │  ─────────────  │                    │
//! │  │  code (barcode)     │───────►│  Vegetables     │                    │
//! │  │  name (match key)   │        │  Dairy          │                    │
//! │  │  category           │        │  Fruits         │                    │
//! │  │  unit_price         │        │  Other          │                    │
//! │  │  discount (0, 1]    │        └─────────────────┘                    │
//! │  │  quantity (≥ 0)     │                                               │
//! │  └─────────────────────┘                                               │
//! │                                                                         │
//! │  cost = unit_price × discount × quantity                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two products are the *same item* when everything but the quantity matches.
//! Same-item products merge on the receipt by adding quantities.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_product;

// =============================================================================
// Category
// =============================================================================

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vegetables,
    Dairy,
    Fruits,
    #[default]
    Other,
}

// =============================================================================
// Product
// =============================================================================

/// A product, either as a catalog entry (quantity = stock on hand) or as a
/// receipt line (quantity = amount bought).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Barcode / SKU. Unique within a catalog.
    pub code: String,

    /// Display name, also the key for substring lookups.
    pub name: String,

    #[serde(default)]
    pub category: Category,

    /// Price per unit (piece or kg) before discount.
    pub unit_price: Decimal,

    /// Multiplicative discount factor in (0, 1]. 1 means full price.
    #[serde(default = "full_price")]
    pub discount: Decimal,

    /// Count or weight; unit depends on the product.
    pub quantity: Decimal,
}

fn full_price() -> Decimal {
    Decimal::ONE
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Errors
    /// `CoreError::Validation` when the code or name is blank, the price is
    /// not positive, the discount is outside (0, 1], the quantity is negative
    /// or the cost does not fit in a decimal.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        unit_price: Decimal,
        discount: Decimal,
        quantity: Decimal,
    ) -> CoreResult<Self> {
        let product = Product {
            code: code.into(),
            name: name.into(),
            category,
            unit_price,
            discount,
            quantity,
        };
        validate_product(&product)?;
        Ok(product)
    }

    /// Returns a copy of this product holding a different quantity.
    pub fn with_quantity(&self, quantity: Decimal) -> Self {
        Product {
            quantity,
            ..self.clone()
        }
    }

    /// Price per unit after discount.
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        Money::new(self.unit_price * self.discount)
    }

    /// Total value of this line: `unit_price × discount × quantity`.
    ///
    /// ## Panics
    /// When the product leaves the decimal range. [`Product::new`], catalog
    /// entries and receipt items are checked against this on the way in;
    /// use [`Product::checked_cost`] for anything else.
    #[inline]
    pub fn cost(&self) -> Money {
        self.effective_unit_price() * self.quantity
    }

    /// [`Product::cost`] without the panic.
    ///
    /// ## Errors
    /// `AmountOverflow` when the product does not fit in a decimal.
    pub fn checked_cost(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_mul(self.discount)
            .and_then(|price| price.checked_mul(self.quantity))
            .map(Money::new)
            .ok_or_else(|| CoreError::AmountOverflow {
                code: self.code.clone(),
            })
    }

    /// Merge-equality: same code, name, category, price and discount.
    /// Quantity is ignored.
    pub fn is_same_item(&self, other: &Product) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.category == other.category
            && self.unit_price == other.unit_price
            && self.discount == other.discount
    }

    /// Orders two products by cost.
    pub fn cmp_by_cost(&self, other: &Product) -> Ordering {
        self.cost().cmp(&other.cost())
    }

    /// Sums the quantities of two entries for the same code.
    ///
    /// ## Errors
    /// - `MismatchedProduct` when the codes differ
    /// - `AmountOverflow` when the summed quantity leaves the decimal range
    pub fn checked_add(&self, other: &Product) -> CoreResult<Product> {
        self.ensure_same_code(other)?;
        let quantity = self
            .quantity
            .checked_add(other.quantity)
            .ok_or_else(|| CoreError::AmountOverflow {
                code: self.code.clone(),
            })?;
        Ok(self.with_quantity(quantity))
    }

    /// Subtracts `other`'s quantity from this one.
    ///
    /// ## Errors
    /// - `MismatchedProduct` when the codes differ
    /// - `InsufficientQuantity` when `other.quantity > self.quantity`
    ///
    /// ```rust
    /// use kassa_core::{Category, CoreError, Product};
    /// use rust_decimal::Decimal;
    ///
    /// let stock = Product::new("001", "Банан", Category::Fruits,
    ///     Decimal::new(105, 0), Decimal::ONE, Decimal::new(10, 0)).unwrap();
    /// let order = stock.with_quantity(Decimal::new(50, 0));
    ///
    /// assert!(matches!(
    ///     stock.checked_sub(&order),
    ///     Err(CoreError::InsufficientQuantity { .. })
    /// ));
    /// ```
    pub fn checked_sub(&self, other: &Product) -> CoreResult<Product> {
        self.ensure_same_code(other)?;
        if self.quantity < other.quantity {
            return Err(CoreError::InsufficientQuantity {
                code: self.code.clone(),
                available: self.quantity,
                requested: other.quantity,
            });
        }
        Ok(self.with_quantity(self.quantity - other.quantity))
    }

    fn ensure_same_code(&self, other: &Product) -> CoreResult<()> {
        if self.code != other.code {
            return Err(CoreError::MismatchedProduct {
                left: self.code.clone(),
                right: other.code.clone(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
