//! # Catalog
//!
//! The read-only list of products that order lines are resolved against.
//!
//! ## Lookup Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve("нан", 2)                                                      │
//! │                                                                         │
//! │  001 Банан     ◄── "Банан".contains("нан")  → first match wins         │
//! │  002 Яблоко                                                             │
//! │  ...                                                                    │
//! │                                                                         │
//! │  • Case-sensitive, no normalization                                     │
//! │  • Stored order decides between several matches                        │
//! │  • Stock check compares the entry's total cost with the requested      │
//! │    amount                                                               │
//! │  • Returns a copy; the catalog itself never changes                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Product;
use crate::validation::validate_product;

/// An ordered, validated set of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from seed products, keeping their order.
    ///
    /// ## Errors
    /// `CoreError::Validation` if any product breaks a field rule or two
    /// products share a code.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.code.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: product.code.clone(),
                }
                .into());
            }
        }

        tracing::debug!(products = products.len(), "Catalog loaded");
        Ok(Catalog { products })
    }

    /// Finds the first product whose name contains `query`.
    pub fn find(&self, query: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name.contains(query))
    }

    /// Finds a product by exact code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// Resolves an order's candidate name to a product copy.
    ///
    /// `required` is checked against the matched entry's total cost
    /// (`unit_price × discount × quantity`), not against its quantity.
    ///
    /// ## Errors
    /// - `ProductNotFound` when no name contains `query`
    /// - `InsufficientStock` when the first match costs less than `required`
    /// - `AmountOverflow` when the match's cost leaves the decimal range
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Catalog, CoreError};
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = Catalog::default();
    /// assert!(matches!(
    ///     catalog.resolve("xyz123", Decimal::ZERO),
    ///     Err(CoreError::ProductNotFound(_))
    /// ));
    /// ```
    pub fn resolve(&self, query: &str, required: Decimal) -> CoreResult<Product> {
        let product = self
            .find(query)
            .ok_or_else(|| CoreError::ProductNotFound(query.to_string()))?;

        let available = product.checked_cost()?;
        if available.amount() < required {
            return Err(CoreError::InsufficientStock {
                name: query.to_string(),
                available,
                requested: required,
            });
        }

        Ok(product.clone())
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(code: &str, name: &str, price: i64, quantity: i64) -> Product {
        Product::new(
            code,
            name,
            Category::Fruits,
            Decimal::new(price, 0),
            Decimal::ONE,
            Decimal::new(quantity, 0),
        )
        .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product("001", "Банан", 105, 100),
            product("002", "Яблоко", 150, 50),
            product("003", "Банан зелёный", 90, 10),
            product("004", "Слива", 1, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_unrepresentable_cost() {
        let big = Product {
            code: "009".to_string(),
            name: "Big".to_string(),
            category: Category::Other,
            unit_price: Decimal::MAX,
            discount: Decimal::ONE,
            quantity: Decimal::new(2, 0),
        };

        let err = Catalog::new(vec![product("001", "Банан", 105, 100), big]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_resolve_substring_first_match_wins() {
        let catalog = catalog();

        let hit = catalog.resolve("Банан", Decimal::ONE).unwrap();
        assert_eq!(hit.code, "001");

        let hit = catalog.resolve("нан", Decimal::ONE).unwrap();
        assert_eq!(hit.code, "001");

        let hit = catalog.resolve("зелён", Decimal::ONE).unwrap();
        assert_eq!(hit.code, "003");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let err = catalog().resolve("банан", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(q) if q == "банан"));
    }

    #[test]
    fn test_resolve_not_found() {
        let err = catalog().resolve("xyz123", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
    }

    #[test]
    fn test_resolve_compares_cost_not_quantity() {
        let catalog = Catalog::new(vec![product("001", "Груша", 2, 3)]).unwrap();

        // 3 in stock but cost is 6: a request for 5 passes, 7 does not.
        assert!(catalog.resolve("Груша", Decimal::new(5, 0)).is_ok());
        let err = catalog.resolve("Груша", Decimal::new(7, 0)).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                name,
                available,
                requested,
            } => {
                assert_eq!(name, "Груша");
                assert_eq!(available.to_string(), "6.00");
                assert_eq!(requested, Decimal::new(7, 0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_sold_out_entry() {
        let catalog = catalog();
        assert!(catalog.resolve("Слива", Decimal::ZERO).is_ok());
        assert!(matches!(
            catalog.resolve("Слива", Decimal::ONE),
            Err(CoreError::InsufficientStock { .. })
        ));
    }

    #[test]
    fn test_resolve_returns_copy() {
        let catalog = catalog();
        let mut hit = catalog.resolve("Яблоко", Decimal::ONE).unwrap();
        hit.quantity = Decimal::ZERO;

        assert_eq!(catalog.get("002").unwrap().quantity, Decimal::new(50, 0));
    }

    #[test]
    fn test_empty_query_matches_first_entry() {
        assert_eq!(catalog().resolve("", Decimal::ZERO).unwrap().code, "001");
    }

    #[test]
    fn test_new_rejects_duplicate_codes() {
        let err = Catalog::new(vec![
            product("001", "Банан", 105, 100),
            product("001", "Яблоко", 150, 50),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_invalid_product() {
        let mut bad = product("001", "Банан", 105, 100);
        bad.discount = Decimal::new(2, 0);
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_accessors() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.products()[1].name, "Яблоко");
        assert!(catalog.get("999").is_none());
        assert!(Catalog::default().is_empty());
    }
}
