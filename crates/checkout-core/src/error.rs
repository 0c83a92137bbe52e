//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CheckoutError    - Scan / pricing failures                             │
//! │  ├── InvalidArgument      (wraps ValidationError)                       │
//! │  ├── UnrecognisedProduct  (SKU not in catalog)                          │
//! │  └── PriceMismatch        (same SKU, two unit prices)                   │
//! │                                                                         │
//! │  ValidationError  - Construction-time input checks                      │
//! │  ConfigError      - Config file loading (binary edge only)              │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, prices)
//! 3. Errors are enum variants, never String
//! 4. Nothing here is retryable: every variant is a caller or business-rule error

use std::path::PathBuf;

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors raised while scanning or pricing a checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// An argument failed validation (empty SKU, non-positive quantity, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// The scanned SKU is not in the product catalog.
    ///
    /// ## When This Occurs
    /// - Unknown SKU ("X")
    /// - Wrong case ("a" when the catalog holds "A"); matching is exact
    #[error("Unrecognised product: '{sku}'")]
    UnrecognisedProduct { sku: String },

    /// The same SKU arrived with two different unit prices in one basket.
    ///
    /// ## When This Occurs
    /// ```text
    /// Scan "A" ──► catalog: A @ 50 ──► basket: A × 1 @ 50
    ///      │
    ///   (price changed in catalog mid-transaction)
    ///      │
    /// Scan "A" ──► catalog: A @ 55 ──► PriceMismatch { existing: 50, attempted: 55 }
    /// ```
    #[error(
        "The unit price '{attempted}' for sku '{sku}' does not match the existing unit price of '{existing}'"
    )]
    PriceMismatch {
        sku: String,
        existing: Money,
        attempted: Money,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when constructing domain values, so that pricing itself never
/// sees an invalid product, rule or setting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be zero or greater")]
    MustNotBeNegative { field: String },

    /// Value must be less than zero.
    #[error("{field} must be less than zero")]
    MustBeNegative { field: String },

    /// Invalid format (e.g. reserved characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Errors raised while loading a [`CheckoutConfig`](crate::config::CheckoutConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// An entry parsed but is not a valid domain value.
    #[error("Invalid config entry '{entry}': {source}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
