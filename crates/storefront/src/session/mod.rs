//! Shopper session context.
//!
//! A [`Session`] owns every piece of mutable UI state: the cart, the active
//! section and whether the cart sheet is open. Front ends mutate it through
//! the methods below and learn about changes by subscribing a
//! [`SessionObserver`]. Events fire only when state actually changes.

mod events;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use premium_vape_core::{Price, ProductId, Section};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

pub use events::{EventLog, SessionEvent, SessionObserver};

use crate::cart::{Cart, CartEntry};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::section::SectionSelector;

/// Serializable picture of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub section: Section,
    pub cart_open: bool,
    pub entries: Vec<CartEntry>,
    pub count: u32,
    pub total: Price,
}

/// State for one shopper, alive for as long as the front end runs.
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Arc<Catalog>,
    cart: Cart,
    selector: SectionSelector,
    cart_open: bool,
    open_cart_on_add: bool,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .field("cart", &self.cart)
            .field("section", &self.selector.active())
            .field("cart_open", &self.cart_open)
            .field("open_cart_on_add", &self.open_cart_on_add)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a session with an empty cart on the catalog section.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: &StorefrontConfig) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog,
            cart: Cart::new(),
            selector: SectionSelector::new(),
            cart_open: false,
            open_cart_on_add: config.open_cart_on_add,
            observers: Vec::new(),
        };
        tracing::info!(
            session_id = %session.id,
            products = session.catalog.len(),
            "Session started"
        );
        session
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn section(&self) -> Section {
        self.selector.active()
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Register an observer for all subsequent state changes.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: SessionObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of a catalog product and, if configured, open the cart.
    ///
    /// Returns the product's quantity after the add. No `CartChanged` event is
    /// emitted when the entry is already at its maximum quantity.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::ProductNotFound` if the catalog has no such product.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<u32> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::ProductNotFound(product_id))?;

        if self.cart.add(product) {
            self.emit_cart_changed();
        }

        if self.open_cart_on_add {
            self.set_cart_open(true);
        }
        Ok(self.cart.get(product_id).map_or(0, CartEntry::quantity))
    }

    /// Remove a product from the cart. Returns `false` if it was not there.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            self.emit_cart_changed();
        }
        removed
    }

    /// Change a cart entry's quantity by `delta` (floored at one).
    ///
    /// Returns `true` if the quantity changed.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i32) -> bool {
        let changed = self.cart.adjust_quantity(product_id, delta);
        if changed {
            self.emit_cart_changed();
        }
        changed
    }

    /// Switch the main content area to `section`.
    ///
    /// Returns `false` if it was already active.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn set_section(&mut self, section: Section) -> bool {
        let changed = self.selector.set(section);
        if changed {
            self.emit(SessionEvent::SectionChanged { section });
        }
        changed
    }

    /// Open or close the cart sheet. Returns `false` if nothing changed.
    pub fn set_cart_open(&mut self, open: bool) -> bool {
        if self.cart_open == open {
            return false;
        }
        self.cart_open = open;
        self.emit(SessionEvent::CartVisibilityChanged { open });
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            section: self.section(),
            cart_open: self.cart_open,
            entries: self.cart.entries().to_vec(),
            count: self.cart.count(),
            total: self.cart.total(),
        }
    }

    fn emit_cart_changed(&mut self) {
        let event = SessionEvent::CartChanged {
            count: self.cart.count(),
            total: self.cart.total(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: SessionEvent) {
        tracing::debug!(session_id = %self.id, ?event, "Session event");
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
