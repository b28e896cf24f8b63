//! Core types for the Premium Vape storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod section;

pub use id::*;
pub use price::{CurrencyCode, CurrencyParseError, Price};
pub use section::{Section, SectionParseError};
