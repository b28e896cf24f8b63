//! Single-section page command.
//!
//! # Usage
//!
//! ```bash
//! pv-cli section reviews
//! ```

use std::io::Write;
use std::sync::Arc;

use premium_vape_core::Section;
use premium_vape_storefront::{
    Catalog, ContentStore, Renderer, Session, StorefrontConfig, StorefrontError,
};

/// Render the page with `name` as the active section into `out`.
///
/// # Errors
///
/// Returns `StorefrontError::Section` if the name is unknown, or an
/// error if rendering or writing to `out` fails.
pub fn show<W: Write>(
    config: &StorefrontConfig,
    name: &str,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let section = name.parse::<Section>().map_err(StorefrontError::from)?;

    let mut session = Session::new(Arc::new(Catalog::builtin()), config);
    session.set_section(section);

    let renderer = Renderer::new(config.clone(), ContentStore::builtin());
    let page = renderer.render_page(&session)?;
    writeln!(out, "{page}")?;

    tracing::info!(%section, "Section rendered");
    Ok(())
}
