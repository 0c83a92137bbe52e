//! # Domain Types
//!
//! The product-like values a basket can hold.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         PricedItem                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  DiscountLine   │   │ CarrierBagLine  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku "A"        │   │  sku            │   │  sku            │       │
//! │  │  price > 0      │   │  "discount:A"   │   │  "carrier-bags:2│       │
//! │  │  (catalog)      │   │  price < 0      │   │  price >= 0     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  The basket only needs {sku, unit_price}; construction rules stay       │
//! │  with each variant.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Synthetic SKUs
//! Discount and carrier bag lines derive their SKU from a reserved marker
//! containing `:`, which [`validate_sku`] refuses for catalog products.

use serde::Serialize;
use ts_rs::TS;

use crate::carrier_bag::CarrierBagResult;
use crate::money::Money;
use crate::validation::{
    validate_discount_value, validate_required, validate_sku, validate_unit_price,
    ValidationResult,
};
use crate::{CARRIER_BAG_SKU_PREFIX, DISCOUNT_SKU_PREFIX};

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Product};
///
/// let product = Product::new("A", Money::from_cents(50)).unwrap();
/// assert_eq!(product.sku(), "A");
///
/// assert!(Product::new("", Money::from_cents(50)).is_err());
/// assert!(Product::new("A", Money::zero()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    sku: String,
    unit_price: Money,
}

impl Product {
    /// Creates a product, validating the SKU and requiring a positive price.
    pub fn new(sku: impl Into<String>, unit_price: Money) -> ValidationResult<Self> {
        let sku = sku.into();
        validate_sku(&sku)?;
        validate_unit_price(unit_price)?;
        Ok(Product { sku, unit_price })
    }

    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Discount Line
// =============================================================================

/// A price reduction attached to one product SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountLine {
    /// SKU of the discounted product.
    source_sku: String,
    /// Synthetic SKU: `discount:<source_sku>`.
    sku: String,
    unit_price: Money,
}

impl DiscountLine {
    /// Creates a discount line for `source_sku`. The price must be negative.
    pub fn new(source_sku: &str, unit_price: Money) -> ValidationResult<Self> {
        validate_required("sku", source_sku)?;
        validate_discount_value(unit_price)?;
        Ok(Self::from_validated(source_sku, unit_price))
    }

    /// Caller guarantees a non-blank SKU and a negative price.
    pub(crate) fn from_validated(source_sku: &str, unit_price: Money) -> Self {
        debug_assert!(unit_price.is_negative());
        DiscountLine {
            source_sku: source_sku.to_string(),
            sku: format!("{DISCOUNT_SKU_PREFIX}{source_sku}"),
            unit_price,
        }
    }

    #[inline]
    pub fn source_sku(&self) -> &str {
        &self.source_sku
    }

    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Carrier Bag Line
// =============================================================================

/// The bag surcharge as a single basket line.
///
/// The unit price is the *total* bag charge and the line quantity is always
/// one; the bag count lives in the SKU (`carrier-bags:3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarrierBagLine {
    bag_qty: u32,
    sku: String,
    unit_price: Money,
}

impl CarrierBagLine {
    /// Builds the surcharge line, or `None` when no bags are needed.
    pub fn from_result(result: &CarrierBagResult) -> Option<Self> {
        if result.qty() == 0 {
            return None;
        }

        Some(CarrierBagLine {
            bag_qty: result.qty(),
            sku: format!("{CARRIER_BAG_SKU_PREFIX}{}", result.qty()),
            unit_price: result.total_price(),
        })
    }

    #[inline]
    pub fn bag_qty(&self) -> u32 {
        self.bag_qty
    }

    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Priced Item
// =============================================================================

/// Anything that can sit in a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum PricedItem {
    Product(Product),
    Discount(DiscountLine),
    CarrierBags(CarrierBagLine),
}

impl PricedItem {
    pub fn sku(&self) -> &str {
        match self {
            PricedItem::Product(p) => p.sku(),
            PricedItem::Discount(d) => d.sku(),
            PricedItem::CarrierBags(b) => b.sku(),
        }
    }

    pub fn unit_price(&self) -> Money {
        match self {
            PricedItem::Product(p) => p.unit_price(),
            PricedItem::Discount(d) => d.unit_price(),
            PricedItem::CarrierBags(b) => b.unit_price(),
        }
    }

    /// Returns the catalog product, if this is not a synthetic line.
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            PricedItem::Product(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        !matches!(self, PricedItem::Product(_))
    }
}

impl From<Product> for PricedItem {
    fn from(product: Product) -> Self {
        PricedItem::Product(product)
    }
}

impl From<DiscountLine> for PricedItem {
    fn from(line: DiscountLine) -> Self {
        PricedItem::Discount(line)
    }
}

impl From<CarrierBagLine> for PricedItem {
    fn from(line: CarrierBagLine) -> Self {
        PricedItem::CarrierBags(line)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
