//! # Discount Engine
//!
//! Derives discount lines from basket contents and a set of per-SKU rules.
//!
//! ## Rule Application
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule: A, trigger 3, value -20          Basket: A × 7 @ 50              │
//! │                                                                         │
//! │  multiples = 7 / 3 = 2                                                  │
//! │                                                                         │
//! │  ┌─────────┐ ┌─────────┐ ┌───┐                                          │
//! │  │ A A A   │ │ A A A   │ │ A │   ──► discount:A @ -20                   │
//! │  │  -20    │ │  -20    │ │   │       discount:A @ -20                   │
//! │  └─────────┘ └─────────┘ └───┘                                          │
//! │                                                                         │
//! │  Cap: when -value > unit price, each bucket gives back exactly its      │
//! │  own price, -(trigger × unit price), and never more.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure: it reads the basket and returns lines. Putting those
//! lines into a basket is the checkout's job.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::basket::Basket;
use crate::money::Money;
use crate::types::DiscountLine;
use crate::validation::{validate_discount_value, validate_positive, validate_sku, ValidationResult};

// =============================================================================
// Discount Rule
// =============================================================================

/// A quantity-triggered discount for one SKU.
///
/// ## Example
/// ```rust
/// use checkout_core::{DiscountRule, Money};
///
/// // Buy 3 A, take 20 off
/// let rule = DiscountRule::new("A", 3, Money::from_cents(-20)).unwrap();
/// assert_eq!(rule.trigger_quantity(), 3);
///
/// assert!(DiscountRule::new("A", 0, Money::from_cents(-20)).is_err());
/// assert!(DiscountRule::new("A", 3, Money::from_cents(20)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountRule {
    sku: String,
    trigger_quantity: u32,
    /// The amount to remove per trigger bucket; always negative.
    discount_value: Money,
}

impl DiscountRule {
    pub fn new(
        sku: impl Into<String>,
        trigger_quantity: u32,
        discount_value: Money,
    ) -> ValidationResult<Self> {
        let sku = sku.into();
        validate_sku(&sku)?;
        validate_positive("trigger quantity", trigger_quantity)?;
        validate_discount_value(discount_value)?;

        Ok(DiscountRule {
            sku,
            trigger_quantity,
            discount_value,
        })
    }

    #[inline]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[inline]
    pub fn trigger_quantity(&self) -> u32 {
        self.trigger_quantity
    }

    #[inline]
    pub fn discount_value(&self) -> Money {
        self.discount_value
    }

    /// Price of one discount line for a product at `unit_price`.
    ///
    /// Capped at the value of the trigger bucket when the discount exceeds
    /// the unit price.
    pub fn line_price(&self, unit_price: Money) -> Money {
        if self.discount_value.abs() > unit_price {
            -unit_price.multiply_quantity(self.trigger_quantity)
        } else {
            self.discount_value
        }
    }

    /// How many times the rule fires for `qty` units.
    #[inline]
    pub fn multiples(&self, qty: u32) -> u32 {
        qty / self.trigger_quantity
    }
}

// =============================================================================
// Discount Source
// =============================================================================

/// Where discount rules come from.
pub trait DiscountSource {
    /// Returns the rule for an exact SKU, if any.
    fn discount_for_sku(&self, sku: &str) -> Option<&DiscountRule>;
}

impl<T: DiscountSource + ?Sized> DiscountSource for &T {
    fn discount_for_sku(&self, sku: &str) -> Option<&DiscountRule> {
        (**self).discount_for_sku(sku)
    }
}

impl<T: DiscountSource + ?Sized> DiscountSource for Box<T> {
    fn discount_for_sku(&self, sku: &str) -> Option<&DiscountRule> {
        (**self).discount_for_sku(sku)
    }
}

/// A fixed list of rules supplied at construction. The first rule for a SKU wins.
#[derive(Debug, Clone, Default)]
pub struct StaticDiscounts {
    rules: Vec<DiscountRule>,
}

impl StaticDiscounts {
    pub fn new(rules: Vec<DiscountRule>) -> Self {
        StaticDiscounts { rules }
    }

    /// No discounts at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }
}

impl FromIterator<DiscountRule> for StaticDiscounts {
    fn from_iter<I: IntoIterator<Item = DiscountRule>>(iter: I) -> Self {
        StaticDiscounts::new(iter.into_iter().collect())
    }
}

impl DiscountSource for StaticDiscounts {
    fn discount_for_sku(&self, sku: &str) -> Option<&DiscountRule> {
        self.rules.iter().find(|rule| rule.sku == sku)
    }
}

// =============================================================================
// Discount Engine
// =============================================================================

/// Turns basket contents into discount lines.
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine<D> {
    source: D,
}

impl<D: DiscountSource> DiscountEngine<D> {
    pub fn new(source: D) -> Self {
        DiscountEngine { source }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    /// Returns the discount lines that apply to `basket`.
    ///
    /// Lines come out in basket order, one per trigger multiple. Synthetic
    /// lines (bags, earlier discounts) never carry rules and are skipped.
    pub fn get_discounts(&self, basket: &Basket) -> Vec<DiscountLine> {
        let mut discounts = Vec::new();

        for basket_item in basket.contents() {
            let Some(product) = basket_item.item().as_product() else {
                continue;
            };
            let Some(rule) = self.source.discount_for_sku(product.sku()) else {
                continue;
            };

            let multiples = rule.multiples(basket_item.qty());
            if multiples == 0 {
                continue;
            }

            let line_price = rule.line_price(product.unit_price());
            debug!(
                sku = %product.sku(),
                qty = basket_item.qty(),
                multiples,
                line_price = line_price.cents(),
                "Discount rule triggered"
            );

            discounts.extend(
                (0..multiples).map(|_| DiscountLine::from_validated(product.sku(), line_price)),
            );
        }

        discounts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::Basket;
    use crate::types::{CarrierBagLine, Product};
    use crate::CarrierBagResult;

    fn rule(sku: &str, trigger: u32, value: i64) -> DiscountRule {
        DiscountRule::new(sku, trigger, Money::from_cents(value)).unwrap()
    }

    fn standard_engine() -> DiscountEngine<StaticDiscounts> {
        DiscountEngine::new(StaticDiscounts::new(vec![rule("A", 3, -20), rule("B", 2, -15)]))
    }

    fn basket_of(lines: &[(&str, i64, u32)]) -> Basket {
        let mut basket = Basket::new();
        for &(sku, price, qty) in lines {
            let product = Product::new(sku, Money::from_cents(price)).unwrap();
            for _ in 0..qty {
                basket.add_product(product.clone()).unwrap();
            }
        }
        basket
    }

    fn total(discounts: &[DiscountLine]) -> i64 {
        discounts.iter().map(|d| d.unit_price().cents()).sum()
    }

    #[test]
    fn test_empty_basket_has_no_discounts() {
        assert!(standard_engine().get_discounts(&Basket::new()).is_empty());
    }

    #[test]
    fn test_sku_without_rule_has_no_discount() {
        let engine = DiscountEngine::new(StaticDiscounts::new(vec![rule("XYZ", 6, -12)]));
        let basket = basket_of(&[("A", 50, 12)]);
        assert!(engine.get_discounts(&basket).is_empty());
    }

    #[test]
    fn test_below_threshold_has_no_discount() {
        let basket = basket_of(&[("A", 50, 2), ("B", 30, 1)]);
        assert!(standard_engine().get_discounts(&basket).is_empty());
    }

    #[test]
    fn test_exactly_at_threshold_gives_one_discount() {
        let discounts = standard_engine().get_discounts(&basket_of(&[("A", 50, 3)]));
        assert_eq!(discounts.len(), 1);
        assert_eq!(discounts[0].unit_price().cents(), -20);
        assert_eq!(discounts[0].sku(), "discount:A");
    }

    #[test]
    fn test_partial_second_bucket_does_not_trigger() {
        for (sku, price, qty, expected) in [("A", 50, 4, -20), ("A", 50, 5, -20), ("B", 30, 3, -15)] {
            let discounts = standard_engine().get_discounts(&basket_of(&[(sku, price, qty)]));
            assert_eq!(discounts.len(), 1, "{sku} × {qty}");
            assert_eq!(total(&discounts), expected, "{sku} × {qty}");
        }
    }

    #[test]
    fn test_discount_repeats_per_multiple() {
        for (sku, price, qty, expected) in [
            ("A", 50, 6, -40),
            ("A", 50, 9, -60),
            ("B", 30, 4, -30),
            ("B", 30, 6, -45),
        ] {
            let discounts = standard_engine().get_discounts(&basket_of(&[(sku, price, qty)]));
            assert!(discounts.len() > 1, "{sku} × {qty}");
            assert_eq!(total(&discounts), expected, "{sku} × {qty}");
        }
    }

    #[test]
    fn test_discounts_follow_basket_order() {
        let basket = basket_of(&[("B", 30, 2), ("C", 20, 5), ("A", 50, 6)]);
        let discounts = standard_engine().get_discounts(&basket);

        let skus: Vec<&str> = discounts.iter().map(DiscountLine::source_sku).collect();
        assert_eq!(skus, vec!["B", "A", "A"]);
        assert_eq!(total(&discounts), -55);
    }

    #[test]
    fn test_discount_capped_at_bucket_value() {
        let engine = DiscountEngine::new(StaticDiscounts::new(vec![rule("A", 3, -1000)]));
        let discounts = engine.get_discounts(&basket_of(&[("A", 50, 3)]));

        assert_eq!(discounts.len(), 1);
        assert_eq!(discounts[0].unit_price().cents(), -150);
    }

    #[test]
    fn test_cap_uses_each_skus_own_price() {
        let engine = DiscountEngine::new(StaticDiscounts::new(vec![
            rule("A", 2, -40),
            rule("B", 2, -40),
        ]));
        let discounts = engine.get_discounts(&basket_of(&[("A", 50, 2), ("B", 30, 2)]));

        // A: 40 <= 50, not capped. B: 40 > 30, capped to 2 × 30.
        assert_eq!(discounts[0].unit_price().cents(), -40);
        assert_eq!(discounts[1].unit_price().cents(), -60);
    }

    #[test]
    fn test_synthetic_lines_are_ignored() {
        let mut basket = basket_of(&[("A", 50, 3)]);
        let bags = CarrierBagResult::new(1, Money::from_cents(5)).unwrap();
        basket
            .add_product(CarrierBagLine::from_result(&bags).unwrap())
            .unwrap();

        let discounts = standard_engine().get_discounts(&basket);
        assert_eq!(discounts.len(), 1);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let source = StaticDiscounts::new(vec![rule("A", 3, -20), rule("A", 2, -99)]);
        assert_eq!(source.discount_for_sku("A").unwrap().trigger_quantity(), 3);
        assert!(source.discount_for_sku("a").is_none());
    }

    #[test]
    fn test_rule_validation() {
        assert!(DiscountRule::new("", 3, Money::from_cents(-20)).is_err());
        assert!(DiscountRule::new("A", 0, Money::from_cents(-20)).is_err());
        assert!(DiscountRule::new("A", 3, Money::zero()).is_err());
    }
}
