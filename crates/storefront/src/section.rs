//! Active section selection.

use premium_vape_core::Section;

/// Holds the one section currently shown in the main content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSelector {
    active: Section,
}

impl SectionSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: Section::Catalog,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Section {
        self.active
    }

    /// Switch to `section`. Returns `false` if it was already active.
    pub fn set(&mut self, section: Section) -> bool {
        if self.active == section {
            return false;
        }
        self.active = section;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_catalog() {
        assert_eq!(SectionSelector::new().active(), Section::Catalog);
        assert_eq!(SectionSelector::default(), SectionSelector::new());
    }

    #[test]
    fn test_set() {
        let mut selector = SectionSelector::new();
        assert!(selector.set(Section::Reviews));
        assert_eq!(selector.active(), Section::Reviews);
        assert!(!selector.set(Section::Reviews));
    }
}
