//! Premium Vape Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and driven by any front end.
//!
//! # Architecture
//!
//! - [`catalog`] - Fixed product list with identifier lookup
//! - [`cart`] - Insertion-ordered cart with merge-on-add and derived totals
//! - [`section`] - Active display section
//! - [`session`] - Session context owning all mutable UI state, with observers
//! - [`content`] - Static copy for the informational sections
//! - [`views`] - Askama text templates for the page, sections and cart sheet

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
mod filters;
pub mod section;
pub mod session;
pub mod views;

pub use cart::{Cart, CartEntry};
pub use catalog::{Catalog, CatalogError, Product};
pub use config::{ConfigError, StorefrontConfig};
pub use content::ContentStore;
pub use error::{Result, StorefrontError};
pub use section::SectionSelector;
pub use session::{EventLog, Session, SessionEvent, SessionObserver, SessionSnapshot};
pub use views::Renderer;
