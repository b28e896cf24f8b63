//! Premium Vape Core - Shared types library.
//!
//! This crate provides common types used across all storefront components:
//! - `storefront` - Catalog, cart, session context and text views
//! - `cli` - Terminal front end for browsing the catalog and cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no templates, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and the section enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
