//! # Checkout Configuration
//!
//! Loads the catalog, discount rules and bagging policy from a file.
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! [[products]]
//! sku = "A"
//! unit_price = 50
//!
//! [[products]]
//! sku = "B"
//! unit_price = 30
//!
//! [[discounts]]
//! sku = "A"
//! trigger_quantity = 3
//! discount_value = -20
//!
//! # Omit this section for regions with no bagging policy.
//! [carrier_bags]
//! country = "UK"
//! unit_price = 5
//! max_items_per_bag = 5
//! ```
//!
//! The same structure is accepted as JSON when the file ends in `.json`.
//! Entries are plain data until converted; conversion runs the same
//! validation as the domain constructors.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::carrier_bag::{
    CarrierBagCalculator, CarrierBagProvider, CarrierProviderSettings, NullCarrierBagProvider,
    DEFAULT_BAG_COUNTRY, DEFAULT_BAG_PRICE, DEFAULT_MAX_ITEMS_PER_BAG,
};
use crate::catalog::InMemoryCatalog;
use crate::checkout::Checkout;
use crate::discount::{DiscountRule, StaticDiscounts};
use crate::error::{ConfigError, ConfigResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

/// Checkout wired from a config file.
pub type ConfiguredCheckout =
    Checkout<InMemoryCatalog, StaticDiscounts, Box<dyn CarrierBagCalculator>>;

// =============================================================================
// Entries
// =============================================================================

/// One catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub sku: String,
    pub unit_price: i64,
}

/// One discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountEntry {
    pub sku: String,
    pub trigger_quantity: u32,
    pub discount_value: i64,
}

/// The bagging policy. Missing fields fall back to the UK defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierBagEntry {
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_bag_price")]
    pub unit_price: i64,

    #[serde(default = "default_max_items_per_bag")]
    pub max_items_per_bag: u32,
}

fn default_country() -> String {
    DEFAULT_BAG_COUNTRY.to_string()
}

fn default_bag_price() -> i64 {
    DEFAULT_BAG_PRICE.cents()
}

fn default_max_items_per_bag() -> u32 {
    DEFAULT_MAX_ITEMS_PER_BAG
}

impl Default for CarrierBagEntry {
    fn default() -> Self {
        CarrierBagEntry {
            country: default_country(),
            unit_price: default_bag_price(),
            max_items_per_bag: default_max_items_per_bag(),
        }
    }
}

// =============================================================================
// Config
// =============================================================================

/// Everything needed to run a checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub products: Vec<ProductEntry>,
    pub discounts: Vec<DiscountEntry>,
    pub carrier_bags: Option<CarrierBagEntry>,
}

impl CheckoutConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&source)?,
            "json" => Self::from_json_str(&source)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        info!(
            path = %path.display(),
            products = config.products.len(),
            discounts = config.discounts.len(),
            carrier_bags = config.carrier_bags.is_some(),
            "Checkout config loaded"
        );
        Ok(config)
    }

    /// Builds the product catalog.
    pub fn catalog(&self) -> ConfigResult<InMemoryCatalog> {
        let products = self
            .products
            .iter()
            .map(|entry| {
                Product::new(entry.sku.clone(), Money::from_cents(entry.unit_price))
                    .map_err(|source| invalid(format!("product {}", entry.sku), source))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(InMemoryCatalog::from_products(products))
    }

    /// Builds the discount rules, keeping file order.
    pub fn discounts(&self) -> ConfigResult<StaticDiscounts> {
        self.discounts
            .iter()
            .map(|entry| {
                DiscountRule::new(
                    entry.sku.clone(),
                    entry.trigger_quantity,
                    Money::from_cents(entry.discount_value),
                )
                .map_err(|source| invalid(format!("discount {}", entry.sku), source))
            })
            .collect()
    }

    /// Builds the bag calculator; no `[carrier_bags]` section means no charge.
    pub fn carrier_bags(&self) -> ConfigResult<Box<dyn CarrierBagCalculator>> {
        let Some(entry) = &self.carrier_bags else {
            debug!("No carrier bag policy configured");
            return Ok(Box::new(NullCarrierBagProvider));
        };

        let settings = CarrierProviderSettings::new(
            entry.country.clone(),
            Money::from_cents(entry.unit_price),
            entry.max_items_per_bag,
        )
        .map_err(|source| invalid(format!("carrier bags {}", entry.country), source))?;

        Ok(Box::new(CarrierBagProvider::new(settings)))
    }

    /// Starts a checkout using everything in this config.
    pub fn checkout(&self) -> ConfigResult<ConfiguredCheckout> {
        Ok(Checkout::new(
            self.catalog()?,
            self.discounts()?,
            self.carrier_bags()?,
        ))
    }
}

fn invalid(entry: String, source: ValidationError) -> ConfigError {
    ConfigError::InvalidEntry { entry, source }
}

// =============================================================================
// Unit Tests
// =============================================================================
