//! # Catalog Seed
//!
//! Where the catalog comes from: the built-in store list, or a JSON file.
//!
//! ## JSON Format
//! ```json
//! [
//!   { "code": "001", "name": "Банан", "category": "fruits",
//!     "unit_price": 105.0, "discount": 1.0, "quantity": 100 }
//! ]
//! ```
//! `category` defaults to `other` and `discount` to `1`. Decimals may be
//! written as numbers or strings.

use std::fs;
use std::path::Path;

use anyhow::Context;
use kassa_core::{Catalog, Category, Product};
use rust_decimal::Decimal;

/// Built-in products: (code, name, category, unit price, stock).
const DEFAULT_PRODUCTS: &[(&str, &str, Category, i64, i64)] = &[
    ("001", "Банан", Category::Fruits, 105, 100),
    ("002", "Яблоко", Category::Fruits, 150, 50),
    ("003", "Огурец", Category::Vegetables, 200, 30),
    ("004", "Помидор", Category::Vegetables, 300, 20),
    ("005", "Картошка", Category::Vegetables, 50, 100),
];

/// The store's default products, all at full price.
pub fn default_products() -> Vec<Product> {
    DEFAULT_PRODUCTS
        .iter()
        .map(|&(code, name, category, price, stock)| Product {
            code: code.to_string(),
            name: name.to_string(),
            category,
            unit_price: Decimal::from(price),
            discount: Decimal::ONE,
            quantity: Decimal::from(stock),
        })
        .collect()
}

/// Reads a JSON array of products.
pub fn load_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))
}

/// Builds the catalog from `path`, or from the defaults when `None`.
pub fn build_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let products = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog file");
            load_products(path)?
        }
        None => default_products(),
    };
    Catalog::new(products).context("Invalid catalog")
}
