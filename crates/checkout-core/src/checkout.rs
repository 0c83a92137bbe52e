//! # Checkout
//!
//! Drives one transaction: scan SKUs, then price the basket.
//!
//! ## Pricing Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    calculate_price()                                    │
//! │                                                                         │
//! │  scanned basket (never modified by pricing)                             │
//! │       │ clone                                                           │
//! │       ▼                                                                 │
//! │  1. empty? ──────────────────────────────────────────► 0                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. carrier bags ──► qty > 0? add "carrier-bags:N" line                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. discounts (against basket incl. bag line) ──► add "discount:SKU"    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. total_value() ───────────────────────────────────► price            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing works on a copy, so calling `calculate_price` twice returns the
//! same total and never stacks bag or discount lines.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::basket::Basket;
use crate::carrier_bag::{CarrierBagCalculator, CarrierBagProvider};
use crate::catalog::ProductCatalog;
use crate::discount::{DiscountEngine, DiscountSource};
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::types::CarrierBagLine;
use crate::validation::validate_required;

/// A single checkout transaction.
///
/// ## Example
/// ```rust
/// use checkout_core::{Checkout, InMemoryCatalog, Money, NullCarrierBagProvider, Product, StaticDiscounts};
///
/// let catalog = InMemoryCatalog::from_products([
///     Product::new("A", Money::from_cents(50)).unwrap(),
///     Product::new("B", Money::from_cents(30)).unwrap(),
/// ]);
///
/// let mut checkout = Checkout::new(&catalog, StaticDiscounts::none(), NullCarrierBagProvider);
/// checkout.scan("A").unwrap();
/// checkout.scan("B").unwrap();
///
/// assert_eq!(checkout.calculate_price().unwrap().cents(), 80);
/// ```
#[derive(Debug)]
pub struct Checkout<C, D, B = CarrierBagProvider> {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: C,
    discounts: DiscountEngine<D>,
    carrier_bags: B,
    basket: Basket,
}

impl<C, D, B> Checkout<C, D, B>
where
    C: ProductCatalog,
    D: DiscountSource,
    B: CarrierBagCalculator,
{
    /// Starts a transaction with an empty basket.
    pub fn new(catalog: C, discounts: D, carrier_bags: B) -> Self {
        let checkout = Checkout {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog,
            discounts: DiscountEngine::new(discounts),
            carrier_bags,
            basket: Basket::new(),
        };
        debug!(transaction_id = %checkout.id, "Checkout started");
        checkout
    }

    /// Scans one SKU into the basket.
    ///
    /// ## Errors
    /// - `InvalidArgument` for an empty or blank SKU
    /// - `UnrecognisedProduct` when the catalog has no exact match
    /// - `PriceMismatch` when the catalog price changed since the last scan
    ///
    /// On error the basket is unchanged.
    pub fn scan(&mut self, sku: &str) -> CheckoutResult<()> {
        validate_required("sku", sku)?;

        let Some(product) = self.catalog.get_product(sku) else {
            warn!(transaction_id = %self.id, sku, "Unrecognised product scanned");
            return Err(CheckoutError::UnrecognisedProduct {
                sku: sku.to_string(),
            });
        };

        let unit_price = product.unit_price();
        self.basket.add_product(product)?;

        debug!(
            transaction_id = %self.id,
            sku,
            unit_price = unit_price.cents(),
            total_items = self.basket.total_item_quantity(),
            "Product scanned"
        );
        Ok(())
    }

    /// Returns a copy of the scanned basket with bag and discount lines added.
    ///
    /// Useful for receipt display; the checkout's own basket is untouched.
    pub fn priced_basket(&self) -> CheckoutResult<Basket> {
        let mut priced = self.basket.clone();

        // Bags and discounts only ever apply to real scanned products.
        if priced.total_item_quantity() == 0 {
            return Ok(priced);
        }

        let bags = self.carrier_bags.calculate_carrier_bags(&priced);
        if let Some(bag_line) = CarrierBagLine::from_result(&bags) {
            debug!(
                transaction_id = %self.id,
                bags = bags.qty(),
                price = bags.total_price().cents(),
                "Carrier bags added"
            );
            priced.add_product(bag_line)?;
        }

        for discount in self.discounts.get_discounts(&priced) {
            priced.add_product(discount)?;
        }

        Ok(priced)
    }

    /// Prices the basket: items, plus bags, minus discounts.
    ///
    /// Returns 0 for an empty basket. Repeated calls return the same total.
    pub fn calculate_price(&self) -> CheckoutResult<Money> {
        if self.basket.total_item_quantity() == 0 {
            return Ok(Money::zero());
        }

        let total = self.priced_basket()?.total_value();
        info!(
            transaction_id = %self.id,
            items = self.basket.total_item_quantity(),
            total = total.cents(),
            "Checkout priced"
        );
        Ok(total)
    }

    /// The scanned products, without bag or discount lines.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
