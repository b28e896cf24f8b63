//! Static copy for the informational sections.
//!
//! Brand text, delivery options, reviews and contact details are fixed for
//! the lifetime of the process. The store is cheap to clone and shared with
//! every view that needs it.

use std::sync::Arc;

use premium_vape_core::Price;
use serde::Serialize;

/// Brand story and highlights for the "about" section.
#[derive(Debug, Clone, Serialize)]
pub struct BrandInfo {
    pub tagline: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

/// One highlight tile on the brand page.
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub caption: String,
}

/// A way of getting an order to the shopper.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryOption {
    pub title: String,
    pub description: String,
    /// `None` when the option is free.
    pub cost: Option<Price>,
    /// Extra condition shown under the cost, such as a free-delivery threshold.
    pub note: Option<String>,
}

/// A customer review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub author: String,
    /// Star rating from 1 to 5.
    pub rating: u8,
    pub text: String,
}

/// Store contact details.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub opening_hours: String,
    pub support_heading: String,
    pub support_note: String,
}

/// Content store that holds all static copy in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    brand: Arc<BrandInfo>,
    delivery: Arc<Vec<DeliveryOption>>,
    reviews: Arc<Vec<Review>>,
    contacts: Arc<ContactInfo>,
}

impl ContentStore {
    /// The copy shipped with the storefront.
    #[must_use]
    pub fn builtin() -> Self {
        let brand = BrandInfo {
            tagline: "Эксклюзивные устройства премиум-класса для истинных ценителей.".to_string(),
            paragraphs: vec![
                "Premium Vape — это эксклюзивный бренд премиальных устройств для вейпинга, \
                 созданный для тех, кто ценит качество, стиль и инновации."
                    .to_string(),
                "Каждое наше устройство разработано с использованием передовых технологий \
                 и отборных материалов. Мы гордимся тем, что создаём продукцию класса люкс, \
                 которая сочетает в себе элегантный дизайн и безупречную функциональность."
                    .to_string(),
            ],
            highlights: vec![
                highlight("🏆", "Премиум качество", "Только лучшие материалы"),
                highlight("⚡", "Инновации", "Передовые технологии"),
                highlight("✨", "Дизайн", "Элегантный стиль"),
            ],
        };

        let delivery = vec![
            DeliveryOption {
                title: "Курьерская доставка".to_string(),
                description: "Доставка по Москве в течение 24 часов.".to_string(),
                cost: Some(Price::new(500)),
                note: Some("При заказе от 20 000 ₽ — доставка бесплатно".to_string()),
            },
            DeliveryOption {
                title: "Пункты выдачи".to_string(),
                description: "Более 200 пунктов выдачи по всей России.".to_string(),
                cost: Some(Price::new(300)),
                note: Some("Срок доставки: 2-5 рабочих дней".to_string()),
            },
            DeliveryOption {
                title: "Самовывоз".to_string(),
                description: "Забрать заказ можно из нашего флагманского магазина в центре Москвы."
                    .to_string(),
                cost: None,
                note: Some("Готовность заказа — 2 часа".to_string()),
            },
        ];

        let reviews = vec![
            review(
                "Александр",
                5,
                "Отличное качество, батарея держит целый день!",
            ),
            review("Мария", 5, "Элегантный дизайн, приятный вкус. Рекомендую!"),
            review(
                "Дмитрий",
                4,
                "Хороший продукт за свои деньги. Доставка быстрая.",
            ),
        ];

        let contacts = ContactInfo {
            phone: "+7 (495) 123-45-67".to_string(),
            email: "info@premiumvape.ru".to_string(),
            address: "Москва, ул. Тверская, д. 1".to_string(),
            opening_hours: "Ежедневно 10:00 - 22:00".to_string(),
            support_heading: "Остались вопросы?".to_string(),
            support_note: "Наши специалисты с радостью проконсультируют вас по любым вопросам."
                .to_string(),
        };

        Self {
            brand: Arc::new(brand),
            delivery: Arc::new(delivery),
            reviews: Arc::new(reviews),
            contacts: Arc::new(contacts),
        }
    }

    #[must_use]
    pub fn brand(&self) -> &BrandInfo {
        &self.brand
    }

    #[must_use]
    pub fn delivery_options(&self) -> &[DeliveryOption] {
        &self.delivery
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn contacts(&self) -> &ContactInfo {
        &self.contacts
    }
}

fn highlight(icon: &str, title: &str, caption: &str) -> Highlight {
    Highlight {
        icon: icon.to_string(),
        title: title.to_string(),
        caption: caption.to_string(),
    }
}

fn review(author: &str, rating: u8, text: &str) -> Review {
    Review {
        author: author.to_string(),
        rating,
        text: text.to_string(),
    }
}
