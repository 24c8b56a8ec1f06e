//! Print the menu grouped by category.

use tracing::info;

use tabletap_core::ProductKind;
use tabletap_storefront::menu;

use crate::commands::Context;
use crate::config::AppConfig;

/// Render the menu the way the customer surface orders it.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;

    for section in menu(&ctx.catalog) {
        if section.products.is_empty() {
            continue;
        }
        info!("{}", section.category);
        for product in &section.products {
            let tag = match product.kind {
                ProductKind::Veg => "veg",
                ProductKind::NonVeg => "non-veg",
            };
            let availability = if product.available { "" } else { "  [sold out]" };
            info!(
                "  {}  {}  {} ({tag}){availability}",
                product.id, product.name, product.price
            );
        }
    }

    Ok(())
}
