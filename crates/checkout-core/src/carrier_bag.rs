//! # Carrier Bags
//!
//! Works out how many bags a basket needs and what they cost.
//!
//! ## Bag Count
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Settings: 5 per bag @ 5                                                │
//! │                                                                         │
//! │  items │ bags │ price                                                   │
//! │  ──────┼──────┼──────                                                   │
//! │     0  │   0  │    0   (empty basket never pays for bags)               │
//! │     1  │   1  │    5                                                    │
//! │     5  │   1  │    5                                                    │
//! │     7  │   2  │   10   (ceil(7 / 5))                                    │
//! │    12  │   3  │   15                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Regions without a bagging policy use [`NullCarrierBagProvider`].

use serde::Serialize;
use ts_rs::TS;

use crate::basket::Basket;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_bag_price, validate_positive, validate_required, ValidationResult,
};

/// Country used by [`CarrierProviderSettings::default`].
pub const DEFAULT_BAG_COUNTRY: &str = "UK";

/// Bag price used by [`CarrierProviderSettings::default`].
pub const DEFAULT_BAG_PRICE: Money = Money::from_cents(5);

/// Bag capacity used by [`CarrierProviderSettings::default`].
pub const DEFAULT_MAX_ITEMS_PER_BAG: u32 = 5;

// =============================================================================
// Settings
// =============================================================================

/// A regional bagging policy. Fixed once constructed.
///
/// ## Example
/// ```rust
/// use checkout_core::{CarrierProviderSettings, Money};
///
/// let wales = CarrierProviderSettings::new("Wales", Money::from_cents(10), 5).unwrap();
/// assert_eq!(wales.country(), "Wales");
///
/// assert!(CarrierProviderSettings::new("", Money::from_cents(10), 5).is_err());
/// assert!(CarrierProviderSettings::new("UK", Money::from_cents(-1), 5).is_err());
/// assert!(CarrierProviderSettings::new("UK", Money::from_cents(5), 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarrierProviderSettings {
    country: String,
    unit_price: Money,
    max_items_per_bag: u32,
}

impl CarrierProviderSettings {
    pub fn new(
        country: impl Into<String>,
        unit_price: Money,
        max_items_per_bag: u32,
    ) -> ValidationResult<Self> {
        let country = country.into();
        validate_required("country", &country)?;
        validate_bag_price(unit_price)?;
        validate_positive("max items per bag", max_items_per_bag)?;

        Ok(CarrierProviderSettings {
            country,
            unit_price,
            max_items_per_bag,
        })
    }

    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn max_items_per_bag(&self) -> u32 {
        self.max_items_per_bag
    }
}

/// The UK policy: up to 5 items per bag, 5 per bag.
impl Default for CarrierProviderSettings {
    fn default() -> Self {
        CarrierProviderSettings {
            country: DEFAULT_BAG_COUNTRY.to_string(),
            unit_price: DEFAULT_BAG_PRICE,
            max_items_per_bag: DEFAULT_MAX_ITEMS_PER_BAG,
        }
    }
}

// =============================================================================
// Result
// =============================================================================

/// Bags required for a basket and their total price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarrierBagResult {
    qty: u32,
    total_price: Money,
}

impl CarrierBagResult {
    pub fn new(qty: u32, total_price: Money) -> ValidationResult<Self> {
        if total_price.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "total price".to_string(),
            });
        }
        Ok(CarrierBagResult { qty, total_price })
    }

    /// No bags, no charge.
    pub const fn none() -> Self {
        CarrierBagResult {
            qty: 0,
            total_price: Money::zero(),
        }
    }

    #[inline]
    pub fn qty(&self) -> u32 {
        self.qty
    }

    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }
}

// =============================================================================
// Calculators
// =============================================================================

/// Computes the bag surcharge for a basket.
pub trait CarrierBagCalculator {
    fn calculate_carrier_bags(&self, basket: &Basket) -> CarrierBagResult;
}

impl<T: CarrierBagCalculator + ?Sized> CarrierBagCalculator for &T {
    fn calculate_carrier_bags(&self, basket: &Basket) -> CarrierBagResult {
        (**self).calculate_carrier_bags(basket)
    }
}

impl<T: CarrierBagCalculator + ?Sized> CarrierBagCalculator for Box<T> {
    fn calculate_carrier_bags(&self, basket: &Basket) -> CarrierBagResult {
        (**self).calculate_carrier_bags(basket)
    }
}

/// Charges per bag according to a [`CarrierProviderSettings`].
#[derive(Debug, Clone, Default)]
pub struct CarrierBagProvider {
    settings: CarrierProviderSettings,
}

impl CarrierBagProvider {
    pub fn new(settings: CarrierProviderSettings) -> Self {
        CarrierBagProvider { settings }
    }

    pub fn settings(&self) -> &CarrierProviderSettings {
        &self.settings
    }

    /// Bags needed for `item_count` items: `ceil(items / capacity)`.
    pub fn bags_for(&self, item_count: u32) -> CarrierBagResult {
        if item_count == 0 {
            return CarrierBagResult::none();
        }

        let qty = item_count.div_ceil(self.settings.max_items_per_bag);
        CarrierBagResult {
            qty,
            total_price: self.settings.unit_price.multiply_quantity(qty),
        }
    }
}

impl CarrierBagCalculator for CarrierBagProvider {
    fn calculate_carrier_bags(&self, basket: &Basket) -> CarrierBagResult {
        self.bags_for(basket.total_item_quantity())
    }
}

/// For regions with no bagging policy: always zero bags.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCarrierBagProvider;

impl CarrierBagCalculator for NullCarrierBagProvider {
    fn calculate_carrier_bags(&self, _basket: &Basket) -> CarrierBagResult {
        CarrierBagResult::none()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn basket_with(items: u32) -> Basket {
        let mut basket = Basket::new();
        let product = Product::new("A", Money::from_cents(50)).unwrap();
        for _ in 0..items {
            basket.add_product(product.clone()).unwrap();
        }
        basket
    }

    #[test]
    fn test_default_settings_are_uk() {
        let settings = CarrierProviderSettings::default();
        assert_eq!(settings.country(), "UK");
        assert_eq!(settings.unit_price().cents(), 5);
        assert_eq!(settings.max_items_per_bag(), 5);
    }

    #[test]
    fn test_no_items_means_no_bags() {
        let result = CarrierBagProvider::default().calculate_carrier_bags(&Basket::new());
        assert_eq!(result, CarrierBagResult::none());
    }

    #[test]
    fn test_single_item_needs_one_bag() {
        let result = CarrierBagProvider::default().calculate_carrier_bags(&basket_with(1));
        assert_eq!(result.qty(), 1);
        assert_eq!(result.total_price().cents(), 5);
    }

    #[test]
    fn test_bag_count_rounds_up() {
        let provider = CarrierBagProvider::default();
        for (items, bags, price) in [(5, 1, 5), (7, 2, 10), (10, 2, 10), (12, 3, 15), (20, 4, 20)] {
            let result = provider.calculate_carrier_bags(&basket_with(items));
            assert_eq!(result.qty(), bags, "{items} items");
            assert_eq!(result.total_price().cents(), price, "{items} items");
        }
    }

    #[test]
    fn test_custom_region_settings() {
        let wales = CarrierProviderSettings::new("Wales", Money::from_cents(10), 5).unwrap();
        let provider = CarrierBagProvider::new(wales);

        assert_eq!(provider.bags_for(0), CarrierBagResult::none());
        assert_eq!(provider.bags_for(6).total_price().cents(), 20);
    }

    #[test]
    fn test_free_bags_still_counted() {
        let free = CarrierProviderSettings::new("Nowhere", Money::zero(), 3).unwrap();
        let result = CarrierBagProvider::new(free).bags_for(4);
        assert_eq!(result.qty(), 2);
        assert!(result.total_price().is_zero());
    }

    #[test]
    fn test_null_provider_never_charges() {
        let result = NullCarrierBagProvider.calculate_carrier_bags(&basket_with(12));
        assert_eq!(result.qty(), 0);
        assert!(result.total_price().is_zero());
    }

    #[test]
    fn test_result_rejects_negative_price() {
        assert!(CarrierBagResult::new(1, Money::from_cents(-5)).is_err());
        assert!(CarrierBagResult::new(0, Money::zero()).is_ok());
    }
}
