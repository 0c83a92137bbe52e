//! # Product Catalog
//!
//! The checkout never owns product data; it asks a [`ProductCatalog`].
//! [`InMemoryCatalog`] is the implementation used by config loading and tests.

use std::collections::HashMap;

use crate::types::Product;

/// Read-only product lookup.
///
/// Implementations must return the same unit price for a SKU for the
/// duration of one transaction, and lookups must be side-effect free.
pub trait ProductCatalog {
    /// Finds the product for an exact, case-sensitive SKU.
    fn get_product(&self, sku: &str) -> Option<Product>;
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for &T {
    fn get_product(&self, sku: &str) -> Option<Product> {
        (**self).get_product(sku)
    }
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for Box<T> {
    fn get_product(&self, sku: &str) -> Option<Product> {
        (**self).get_product(sku)
    }
}

/// A catalog held in a `HashMap`, keyed by SKU.
///
/// ## Example
/// ```rust
/// use checkout_core::{InMemoryCatalog, Money, Product, ProductCatalog};
///
/// let catalog = InMemoryCatalog::from_products([
///     Product::new("A", Money::from_cents(50)).unwrap(),
/// ]);
///
/// assert!(catalog.get_product("A").is_some());
/// assert!(catalog.get_product("a").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog; a later product replaces an earlier one with the same SKU.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Inserts or replaces a product, returning the one it replaced.
    pub fn insert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.sku().to_string(), product)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn get_product(&self, sku: &str) -> Option<Product> {
        self.products.get(sku).cloned()
    }
}
