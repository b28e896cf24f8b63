//! Informational section views.

use askama::Template;
use premium_vape_core::CurrencyCode;

use crate::content::{BrandInfo, ContactInfo, DeliveryOption, Review};
use crate::filters;

const FREE_LABEL: &str = "Бесплатно";

/// Brand section template.
#[derive(Template)]
#[template(path = "sections/about.txt")]
pub struct AboutTemplate<'a> {
    pub brand: &'a BrandInfo,
}

/// Delivery option display data for templates.
#[derive(Debug, Clone)]
pub struct DeliveryOptionView {
    pub title: String,
    pub description: String,
    pub cost: String,
    pub note: Option<String>,
}

/// Delivery section template.
#[derive(Template)]
#[template(path = "sections/delivery.txt")]
pub struct DeliveryTemplate {
    pub options: Vec<DeliveryOptionView>,
}

impl DeliveryTemplate {
    #[must_use]
    pub fn new(options: &[DeliveryOption], currency: CurrencyCode) -> Self {
        Self {
            options: options
                .iter()
                .map(|option| DeliveryOptionView {
                    title: option.title.clone(),
                    description: option.description.clone(),
                    cost: option
                        .cost
                        .map_or_else(|| FREE_LABEL.to_string(), |cost| cost.display(currency)),
                    note: option.note.clone(),
                })
                .collect(),
        }
    }
}

/// Reviews section template.
#[derive(Template)]
#[template(path = "sections/reviews.txt")]
pub struct ReviewsTemplate<'a> {
    pub reviews: &'a [Review],
}

/// Contacts section template.
#[derive(Template)]
#[template(path = "sections/contacts.txt")]
pub struct ContactsTemplate<'a> {
    pub contacts: &'a ContactInfo,
}
