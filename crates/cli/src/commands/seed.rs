//! Initialize the data directory with the seed catalog.

use tracing::info;

use crate::commands::Context;
use crate::config::AppConfig;

/// Open the store (which runs the seed merge) and report what it holds.
///
/// Safe to run repeatedly: the merge is additive and idempotent, so
/// existing data is never overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created.
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;

    info!(dir = %config.data_dir.display(), "Data directory ready");
    info!("  Products: {}", ctx.catalog.products().len());
    info!("  Categories: {}", ctx.catalog.categories().len());
    info!("  Orders: {}", ctx.orders.orders().len());

    Ok(())
}
