//! Catalog grid view.

use askama::Template;
use premium_vape_core::CurrencyCode;

use crate::catalog::{Catalog, Product};

const FLAVOR_SEPARATOR: &str = " · ";

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub battery: String,
    pub capacity: String,
    pub flavors: String,
    pub bestseller: bool,
}

impl ProductCardView {
    #[must_use]
    pub fn new(product: &Product, currency: CurrencyCode) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.display(currency),
            battery: product.battery.clone(),
            capacity: product.capacity.clone(),
            flavors: product.flavors.join(FLAVOR_SEPARATOR),
            bestseller: product.bestseller,
        }
    }
}

/// Catalog section template.
#[derive(Template)]
#[template(path = "sections/catalog.txt")]
pub struct CatalogTemplate {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub products: Vec<ProductCardView>,
}

impl CatalogTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog, currency: CurrencyCode) -> Self {
        Self {
            heading: "Премиальные устройства",
            subheading: "Откройте для себя мир изысканных вкусов и технологий",
            products: catalog
                .list_products()
                .iter()
                .map(|p| ProductCardView::new(p, currency))
                .collect(),
        }
    }
}
