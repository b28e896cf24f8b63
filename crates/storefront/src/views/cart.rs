//! Cart sheet view.

use askama::Template;
use premium_vape_core::CurrencyCode;

use crate::cart::{Cart, CartEntry};

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl CartItemView {
    #[must_use]
    pub fn new(entry: &CartEntry, currency: CurrencyCode) -> Self {
        Self {
            id: entry.id().as_i32(),
            name: entry.product.name.clone(),
            quantity: entry.quantity(),
            price: entry.product.price.display(currency),
            line_price: entry.line_total().display(currency),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .entries()
                .iter()
                .map(|e| CartItemView::new(e, currency))
                .collect(),
            total: cart.total().display(currency),
            item_count: cart.count(),
        }
    }
}

/// Cart sheet template.
#[derive(Template)]
#[template(path = "partials/cart_sheet.txt")]
pub struct CartSheetTemplate {
    pub cart: CartView,
}
