//! Text views of the storefront page.
//!
//! Each part of the page (header, section body, cart sheet, footer) is an
//! Askama template fed by a small view model with pre-formatted strings.
//! [`Renderer`] assembles them from the current session state.

mod cart;
mod catalog;
mod pages;

use askama::Template;
use premium_vape_core::Section;

pub use cart::{CartItemView, CartSheetTemplate, CartView};
pub use catalog::{CatalogTemplate, ProductCardView};
pub use pages::{
    AboutTemplate, ContactsTemplate, DeliveryOptionView, DeliveryTemplate, ReviewsTemplate,
};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::error::Result;
use crate::filters;
use crate::session::Session;

/// One navigation entry in the header.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Header with brand name, navigation and cart badge.
#[derive(Template)]
#[template(path = "partials/header.txt")]
pub struct HeaderTemplate {
    pub store_name: String,
    pub nav: Vec<NavItem>,
    pub cart_count: u32,
}

/// Footer with tagline, contacts and copyright line.
#[derive(Template)]
#[template(path = "partials/footer.txt")]
pub struct FooterTemplate {
    pub store_name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Full page: header, active section, optional cart sheet, footer.
#[derive(Template)]
#[template(path = "page.txt")]
pub struct PageTemplate {
    pub header: String,
    pub body: String,
    pub cart_sheet: Option<String>,
    pub footer: String,
}

/// Renders views from session state and static content.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: StorefrontConfig,
    content: ContentStore,
}

impl Renderer {
    #[must_use]
    pub const fn new(config: StorefrontConfig, content: ContentStore) -> Self {
        Self { config, content }
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Render the whole page as the shopper currently sees it.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if a template fails to render.
    pub fn render_page(&self, session: &Session) -> Result<String> {
        let cart_sheet = if session.is_cart_open() {
            Some(self.render_cart(session.cart())?)
        } else {
            None
        };

        let page = PageTemplate {
            header: self.render_header(session)?,
            body: self.render_section(session.section(), session.catalog())?,
            cart_sheet,
            footer: self.render_footer()?,
        };
        Ok(page.render()?)
    }

    /// Render the header for the session's active section and cart count.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    pub fn render_header(&self, session: &Session) -> Result<String> {
        let active = session.section();
        let header = HeaderTemplate {
            store_name: self.config.store_name.clone(),
            nav: Section::ALL
                .into_iter()
                .map(|section| NavItem {
                    key: section.key(),
                    label: section.label(),
                    active: section == active,
                })
                .collect(),
            cart_count: session.cart().count(),
        };
        Ok(header.render()?)
    }

    /// Render the main content area for `section`.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    pub fn render_section(&self, section: Section, catalog: &Catalog) -> Result<String> {
        let currency = self.config.currency;
        let rendered = match section {
            Section::Catalog => CatalogTemplate::new(catalog, currency).render()?,
            Section::About => AboutTemplate {
                brand: self.content.brand(),
            }
            .render()?,
            Section::Delivery => {
                DeliveryTemplate::new(self.content.delivery_options(), currency).render()?
            }
            Section::Reviews => ReviewsTemplate {
                reviews: self.content.reviews(),
            }
            .render()?,
            Section::Contacts => ContactsTemplate {
                contacts: self.content.contacts(),
            }
            .render()?,
        };
        Ok(rendered)
    }

    /// Render the cart sheet.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    pub fn render_cart(&self, cart: &Cart) -> Result<String> {
        let sheet = CartSheetTemplate {
            cart: CartView::new(cart, self.config.currency),
        };
        Ok(sheet.render()?)
    }

    /// Render the footer.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    pub fn render_footer(&self) -> Result<String> {
        let contacts = self.content.contacts();
        let footer = FooterTemplate {
            store_name: self.config.store_name.clone(),
            tagline: self.content.brand().tagline.clone(),
            phone: contacts.phone.clone(),
            email: contacts.email.clone(),
            address: contacts.address.clone(),
        };
        Ok(footer.render()?)
    }
}
