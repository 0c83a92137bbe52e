//! # Basket
//!
//! The live collection of scanned items for one transaction.
//!
//! ## Invariants
//! - At most one [`BasketItem`] per SKU (repeat scans increase `qty`)
//! - Enumeration follows first-insertion order
//! - A SKU keeps one unit price for the life of the basket
//! - Quantities only ever go up
//!
//! ## Add Flow
//! ```text
//! add_product(A @ 50)
//!      │
//!      ├── A not in basket ──► push BasketItem { A, qty: 1 }
//!      │
//!      └── A in basket
//!             ├── price differs ──► Err(PriceMismatch), basket unchanged
//!             └── price matches ──► qty += 1
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::PricedItem;
use crate::validation::{validate_quantity, ValidationResult};

// =============================================================================
// Basket Item
// =============================================================================

/// One SKU's accumulated quantity within a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    item: PricedItem,
    qty: u32,
}

impl BasketItem {
    /// Creates an item with the given quantity, which must be at least one.
    pub fn new(item: impl Into<PricedItem>, qty: u32) -> ValidationResult<Self> {
        validate_quantity(qty)?;
        Ok(BasketItem {
            item: item.into(),
            qty,
        })
    }

    /// Increases the quantity by `increment`, which must be at least one.
    pub fn increment_qty(&mut self, increment: u32) -> ValidationResult<()> {
        validate_quantity(increment)?;
        self.qty += increment;
        Ok(())
    }

    #[inline]
    pub fn item(&self) -> &PricedItem {
        &self.item
    }

    #[inline]
    pub fn sku(&self) -> &str {
        self.item.sku()
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.item.unit_price()
    }

    #[inline]
    pub fn qty(&self) -> u32 {
        self.qty
    }

    /// `qty × unit_price`; negative for discount lines.
    #[inline]
    pub fn total_value(&self) -> Money {
        self.unit_price().multiply_quantity(self.qty)
    }
}

// =============================================================================
// Basket
// =============================================================================

/// Ordered, SKU-keyed collection of [`BasketItem`]s.
///
/// ## Example
/// ```rust
/// use checkout_core::{Basket, Money, Product};
///
/// let mut basket = Basket::new();
/// let a = Product::new("A", Money::from_cents(50)).unwrap();
///
/// basket.add_product(a.clone()).unwrap();
/// basket.add_product(a).unwrap();
///
/// assert_eq!(basket.len(), 1);
/// assert_eq!(basket.total_item_quantity(), 2);
/// assert_eq!(basket.total_value().cents(), 100);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Basket {
    items: Vec<BasketItem>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item` to the basket.
    ///
    /// Fails with [`CheckoutError::PriceMismatch`] if the SKU is already
    /// present at a different unit price; the basket is left untouched.
    pub fn add_product(&mut self, item: impl Into<PricedItem>) -> CheckoutResult<()> {
        let item = item.into();

        if let Some(&position) = self.index.get(item.sku()) {
            let existing = &mut self.items[position];
            if existing.unit_price() != item.unit_price() {
                return Err(CheckoutError::PriceMismatch {
                    sku: item.sku().to_string(),
                    existing: existing.unit_price(),
                    attempted: item.unit_price(),
                });
            }
            existing.increment_qty(1)?;
            return Ok(());
        }

        let basket_item = BasketItem::new(item, 1)?;
        self.index
            .insert(basket_item.sku().to_string(), self.items.len());
        self.items.push(basket_item);
        Ok(())
    }

    /// Items in first-insertion order. Reflects the live basket.
    pub fn contents(&self) -> &[BasketItem] {
        &self.items
    }

    /// Looks up the item for an exact SKU.
    pub fn get(&self, sku: &str) -> Option<&BasketItem> {
        self.index.get(sku).map(|&position| &self.items[position])
    }

    /// Sum of all item quantities; 0 for an empty basket.
    pub fn total_item_quantity(&self) -> u32 {
        self.items.iter().map(BasketItem::qty).sum()
    }

    /// Sum of all line values, discounts included; 0 for an empty basket.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(BasketItem::total_value).sum()
    }

    /// Number of distinct SKUs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiscountLine, Product};

    fn product(sku: &str, price: i64) -> Product {
        Product::new(sku, Money::from_cents(price)).unwrap()
    }

    #[test]
    fn test_empty_basket() {
        let basket = Basket::new();
        assert!(basket.is_empty());
        assert_eq!(basket.total_item_quantity(), 0);
        assert!(basket.total_value().is_zero());
        assert!(basket.contents().is_empty());
    }

    #[test]
    fn test_same_sku_increments_quantity() {
        let mut basket = Basket::new();
        basket.add_product(product("A", 50)).unwrap();
        basket.add_product(product("A", 50)).unwrap();

        assert_eq!(basket.len(), 1);
        assert_eq!(basket.get("A").unwrap().qty(), 2);
        assert_eq!(basket.total_value().cents(), 100);
    }

    #[test]
    fn test_price_mismatch_leaves_basket_unchanged() {
        let mut basket = Basket::new();
        basket.add_product(product("A", 50)).unwrap();

        let err = basket.add_product(product("A", 55)).unwrap_err();
        match err {
            CheckoutError::PriceMismatch {
                sku,
                existing,
                attempted,
            } => {
                assert_eq!(sku, "A");
                assert_eq!(existing.cents(), 50);
                assert_eq!(attempted.cents(), 55);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(basket.total_item_quantity(), 1);
        assert_eq!(basket.total_value().cents(), 50);
    }

    #[test]
    fn test_contents_preserve_insertion_order() {
        let mut basket = Basket::new();
        for sku in ["C", "A", "C", "B", "A"] {
            basket.add_product(product(sku, 10)).unwrap();
        }

        let skus: Vec<&str> = basket.contents().iter().map(BasketItem::sku).collect();
        assert_eq!(skus, vec!["C", "A", "B"]);
        assert_eq!(basket.total_item_quantity(), 5);
    }

    #[test]
    fn test_discount_lines_reduce_total_value() {
        let mut basket = Basket::new();
        for _ in 0..3 {
            basket.add_product(product("A", 50)).unwrap();
        }
        basket
            .add_product(DiscountLine::new("A", Money::from_cents(-20)).unwrap())
            .unwrap();

        assert_eq!(basket.len(), 2);
        assert_eq!(basket.total_value().cents(), 130);
        assert_eq!(basket.get("discount:A").unwrap().total_value().cents(), -20);
    }

    #[test]
    fn test_basket_item_quantity_rules() {
        assert!(BasketItem::new(product("A", 50), 0).is_err());

        let mut item = BasketItem::new(product("A", 50), 12).unwrap();
        assert_eq!(item.total_value().cents(), 600);

        assert!(item.increment_qty(0).is_err());
        item.increment_qty(3).unwrap();
        assert_eq!(item.qty(), 15);
    }
}
