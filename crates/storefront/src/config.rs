//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_NAME` - Brand name shown in the header (default: PREMIUM VAPE)
//! - `STOREFRONT_CURRENCY` - ISO 4217 code used to display prices (default: RUB)
//! - `STOREFRONT_OPEN_CART_ON_ADD` - Open the cart sheet after adding a product
//!   (default: true)

use premium_vape_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_STORE_NAME: &str = "PREMIUM VAPE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Brand name shown in the header and footer
    pub store_name: String,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Whether adding a product opens the cart sheet
    pub open_cart_on_add: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            currency: CurrencyCode::default(),
            open_cart_on_add: true,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_name = lookup("STOREFRONT_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let currency = match lookup("STOREFRONT_CURRENCY") {
            Some(code) => code.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_CURRENCY".to_string(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        let open_cart_on_add = match lookup("STOREFRONT_OPEN_CART_ON_ADD") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "STOREFRONT_OPEN_CART_ON_ADD".to_string(),
                    format!("expected true/false, got '{value}'"),
                )
            })?,
            None => true,
        };

        Ok(Self {
            store_name,
            currency,
            open_cart_on_add,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse the usual spellings of a boolean flag.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
