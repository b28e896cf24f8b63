//! Display sections of the storefront page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a section key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct SectionParseError(pub String);

/// One of the fixed display modes shown in the main content area.
///
/// Serializes as the lowercase key used in navigation (`catalog`, `about`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Catalog,
    About,
    Delivery,
    Reviews,
    Contacts,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Catalog,
        Self::About,
        Self::Delivery,
        Self::Reviews,
        Self::Contacts,
    ];

    /// Navigation key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::About => "about",
            Self::Delivery => "delivery",
            Self::Reviews => "reviews",
            Self::Contacts => "contacts",
        }
    }

    /// Navigation label shown to shoppers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Catalog => "Каталог",
            Self::About => "О бренде",
            Self::Delivery => "Доставка",
            Self::Reviews => "Отзывы",
            Self::Contacts => "Контакты",
        }
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_catalog() {
        assert_eq!(Section::default(), Section::Catalog);
    }

    #[test]
    fn test_parse_keys() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>().unwrap(), section);
        }
        assert_eq!("  Reviews ".parse::<Section>().unwrap(), Section::Reviews);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "checkout".parse::<Section>().unwrap_err();
        assert_eq!(err.to_string(), "unknown section: checkout");
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Section::Delivery).unwrap();
        assert_eq!(json, "\"delivery\"");
        let parsed: Section = serde_json::from_str("\"contacts\"").unwrap();
        assert_eq!(parsed, Section::Contacts);
    }
}
