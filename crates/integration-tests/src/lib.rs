//! Integration tests for the Premium Vape storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p premium-vape-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart invariants over the public API
//! - `session_flow` - Session, observers and rendering end to end
//!
//! This library holds the shared fixtures.

use std::sync::Arc;

use premium_vape_core::{Price, ProductId};
use premium_vape_storefront::{
    Catalog, ContentStore, EventLog, Product, Renderer, Session, StorefrontConfig,
};

/// A product with only an id and a price.
#[must_use]
pub fn product(id: i32, price: i64) -> Product {
    Product::new(ProductId::new(id), format!("Test product {id}"), Price::new(price))
}

/// A session over the launch catalog with an event log subscribed.
#[must_use]
pub fn session_with_log() -> (Session, EventLog) {
    let mut session = Session::new(Arc::new(Catalog::builtin()), &StorefrontConfig::default());
    let log = EventLog::new();
    session.subscribe(log.clone());
    (session, log)
}

/// A renderer with default configuration and the shipped content.
#[must_use]
pub fn renderer() -> Renderer {
    Renderer::new(StorefrontConfig::default(), ContentStore::builtin())
}
