//! # checkout-core: Pricing Engine for a Point-of-Sale Checkout
//!
//! Given a sequence of scanned SKUs, computes the final checkout total with
//! quantity-triggered discounts and a carrier bag surcharge.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        checkout-core                                    │
//! │                                                                         │
//! │   scan("A") ──► ProductCatalog ──► Basket::add_product                  │
//! │                  (injected)                                             │
//! │                                                                         │
//! │   calculate_price()                                                     │
//! │        │                                                                │
//! │        ├──► CarrierBagCalculator ──► "carrier-bags:N" line              │
//! │        │                                                                │
//! │        ├──► DiscountEngine ◄── DiscountSource (injected)                │
//! │        │         └──► "discount:SKU" lines                              │
//! │        │                                                                │
//! │        └──► Basket::total_value()                                       │
//! │                                                                         │
//! │   NO DATABASE • NO NETWORK • NO GLOBAL STATE                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, discount and carrier bag lines
//! - [`money`] - Integer money type
//! - [`basket`] - Basket and BasketItem
//! - [`catalog`] - Product lookup trait and in-memory catalog
//! - [`discount`] - Discount rules and engine
//! - [`carrier_bag`] - Bagging policy and calculators
//! - [`checkout`] - Scan / price orchestration
//! - [`config`] - Loading collaborators from TOML or JSON
//! - [`error`] - Error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{
//!     CarrierBagProvider, Checkout, DiscountRule, InMemoryCatalog, Money, Product,
//!     StaticDiscounts,
//! };
//!
//! let catalog = InMemoryCatalog::from_products([
//!     Product::new("A", Money::from_cents(50)).unwrap(),
//! ]);
//! let discounts = StaticDiscounts::new(vec![
//!     DiscountRule::new("A", 3, Money::from_cents(-20)).unwrap(),
//! ]);
//!
//! let mut checkout = Checkout::new(catalog, discounts, CarrierBagProvider::default());
//! for _ in 0..6 {
//!     checkout.scan("A").unwrap();
//! }
//!
//! // 6 × 50, two bags at 5, two discounts of 20
//! assert_eq!(checkout.calculate_price().unwrap().cents(), 300 + 10 - 40);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod carrier_bag;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod discount;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, BasketItem};
pub use carrier_bag::{
    CarrierBagCalculator, CarrierBagProvider, CarrierBagResult, CarrierProviderSettings,
    NullCarrierBagProvider,
};
pub use catalog::{InMemoryCatalog, ProductCatalog};
pub use checkout::Checkout;
pub use config::CheckoutConfig;
pub use discount::{DiscountEngine, DiscountRule, DiscountSource, StaticDiscounts};
pub use error::{CheckoutError, CheckoutResult, ConfigError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix of discount line SKUs (`discount:A`).
///
/// Contains `:`, which catalog SKUs may not, so discount lines never share a
/// basket entry with a real product.
pub const DISCOUNT_SKU_PREFIX: &str = "discount:";

/// Prefix of carrier bag line SKUs; the bag count follows (`carrier-bags:2`).
pub const CARRIER_BAG_SKU_PREFIX: &str = "carrier-bags:";
