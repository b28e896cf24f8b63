//! Unified error handling for the storefront.
//!
//! The cart model itself never fails; errors come from the seams around it:
//! resolving identifiers typed by a shopper, building the catalog, loading
//! configuration and rendering templates.

use premium_vape_core::{ProductId, SectionParseError};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// No catalog product carries the requested identifier.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Navigation to a section that does not exist.
    #[error("Invalid section: {0}")]
    Section(#[from] SectionParseError),

    /// Catalog construction failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl StorefrontError {
    /// Whether the error was caused by shopper input rather than the program.
    ///
    /// Front ends report these back to the shopper and carry on.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::ProductNotFound(_) | Self::Section(_))
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
