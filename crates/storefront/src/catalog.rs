//! Product catalog.
//!
//! The catalog is a fixed, ordered list of products built once at startup and
//! shared read-only for the lifetime of the process.

use std::collections::HashSet;

use premium_vape_core::{Price, ProductId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in minor currency units.
    pub price: Price,
    /// Image path relative to the site root.
    pub image: String,
    /// Battery capacity label, e.g. `1500mAh`.
    pub battery: String,
    /// Liquid capacity label, e.g. `6ml`.
    pub capacity: String,
    /// Flavor labels in display order.
    pub flavors: Vec<String>,
    #[serde(default)]
    pub bestseller: bool,
}

impl Product {
    /// Create a product with a name and price and no descriptive labels.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            battery: String::new(),
            capacity: String::new(),
            flavors: Vec::new(),
            bestseller: false,
        }
    }

    /// Set the image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the battery and liquid capacity labels.
    #[must_use]
    pub fn with_specs(mut self, battery: impl Into<String>, capacity: impl Into<String>) -> Self {
        self.battery = battery.into();
        self.capacity = capacity.into();
        self
    }

    /// Set the flavor labels.
    #[must_use]
    pub fn with_flavors<I, S>(mut self, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = flavors.into_iter().map(Into::into).collect();
        self
    }

    /// Flag the product as a bestseller.
    #[must_use]
    pub const fn as_bestseller(mut self) -> Self {
        self.bestseller = true;
        self
    }
}

/// An ordered, immutable collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an identifier.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The launch catalog.
    #[must_use]
    pub fn builtin() -> Self {
        const GOLD_IMAGE: &str = "/img/daf37f7b-5e93-450d-8a70-c93497024116.jpg";
        const BLACK_IMAGE: &str = "/img/80aa64bc-7e77-4746-950a-43432c796349.jpg";
        const SIGNATURE_IMAGE: &str = "/img/6ac5aa12-2085-414f-9430-60ca35e6b7fe.jpg";

        let products = vec![
            Product::new(ProductId::new(1), "LUXE Gold Edition", Price::new(12990))
                .with_image(GOLD_IMAGE)
                .with_specs("1500mAh", "6ml")
                .with_flavors(["Табак", "Мята", "Ваниль"])
                .as_bestseller(),
            Product::new(ProductId::new(2), "PREMIUM Black Pro", Price::new(15990))
                .with_image(BLACK_IMAGE)
                .with_specs("2000mAh", "8ml")
                .with_flavors(["Ягоды", "Цитрус", "Кофе"])
                .as_bestseller(),
            Product::new(ProductId::new(3), "ELITE Signature", Price::new(18990))
                .with_image(SIGNATURE_IMAGE)
                .with_specs("2500mAh", "10ml")
                .with_flavors(["Шоколад", "Карамель", "Мята"]),
            Product::new(ProductId::new(4), "ROYAL Diamond", Price::new(21990))
                .with_image(GOLD_IMAGE)
                .with_specs("3000mAh", "12ml")
                .with_flavors(["Фрукты", "Десерт", "Классик"])
                .as_bestseller(),
            Product::new(ProductId::new(5), "IMPERIAL Gold", Price::new(9990))
                .with_image(BLACK_IMAGE)
                .with_specs("1200mAh", "5ml")
                .with_flavors(["Табак", "Ментол"]),
            Product::new(ProductId::new(6), "PRESTIGE Noir", Price::new(16990))
                .with_image(SIGNATURE_IMAGE)
                .with_specs("2200mAh", "9ml")
                .with_flavors(["Ваниль", "Кофе", "Шоколад"]),
        ];

        Self { products }
    }

    /// All products in display order.
    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by identifier.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products flagged as bestsellers, in display order.
    pub fn bestsellers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.bestseller)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order_and_prices() {
        let catalog = Catalog::builtin();
        let summary: Vec<(i32, i64)> = catalog
            .list_products()
            .iter()
            .map(|p| (p.id.as_i32(), p.price.minor_units()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, 12990),
                (2, 15990),
                (3, 18990),
                (4, 21990),
                (5, 9990),
                (6, 16990)
            ]
        );
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let products = Catalog::builtin().list_products().to_vec();
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_builtin_bestsellers() {
        let catalog = Catalog::builtin();
        let ids: Vec<i32> = catalog.bestsellers().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::builtin();
        let product = catalog.get(ProductId::new(5)).unwrap();
        assert_eq!(product.name, "IMPERIAL Gold");
        assert_eq!(product.flavors, vec!["Табак", "Ментол"]);
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Product::new(ProductId::new(1), "A", Price::new(100)),
            Product::new(ProductId::new(2), "B", Price::new(200)),
            Product::new(ProductId::new(1), "C", Price::new(300)),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId(ProductId::new(1))));
    }

    #[test]
    fn test_bestseller_defaults_to_false_when_absent() {
        let json = r#"{
            "id": 7,
            "name": "NOVA",
            "price": 5000,
            "image": "",
            "battery": "900mAh",
            "capacity": "3ml",
            "flavors": []
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.bestseller);
        assert_eq!(product.price, Price::new(5000));
    }
}
