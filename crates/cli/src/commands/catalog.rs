//! Catalog listing command.
//!
//! # Usage
//!
//! ```bash
//! pv-cli catalog
//! pv-cli catalog --json
//! ```

use std::io::Write;

use premium_vape_core::Section;
use premium_vape_storefront::{Catalog, ContentStore, Renderer, StorefrontConfig};

/// Write the catalog to `out`, as text or as a JSON array of products.
///
/// # Errors
///
/// Returns an error if rendering or writing to `out` fails.
pub fn list<W: Write>(
    config: &StorefrontConfig,
    json: bool,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();

    if json {
        serde_json::to_writer_pretty(&mut out, catalog.list_products())?;
        writeln!(out)?;
    } else {
        let renderer = Renderer::new(config.clone(), ContentStore::builtin());
        writeln!(out, "{}", renderer.render_section(Section::Catalog, &catalog)?)?;
    }

    tracing::info!(products = catalog.len(), json, "Catalog listed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use premium_vape_storefront::Product;

    use super::*;

    #[test]
    fn test_json_listing_parses_back_in_catalog_order() {
        let mut out = Vec::new();
        list(&StorefrontConfig::default(), true, &mut out).unwrap();

        let products: Vec<Product> = serde_json::from_slice(&out).unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        let prices: Vec<i64> = products.iter().map(|p| p.price.minor_units()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(prices, vec![12990, 15990, 18990, 21990, 9990, 16990]);
        assert_eq!(products, Catalog::builtin().list_products());
    }

    #[test]
    fn test_text_listing() {
        let mut out = Vec::new();
        list(&StorefrontConfig::default(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("LUXE Gold Edition"));
        assert!(text.contains("9 990 ₽"));
    }
}
