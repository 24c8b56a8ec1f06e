//! Customer ordering flow: place and track.

use chrono::Utc;
use tracing::info;

use tabletap_core::ProductId;
use tabletap_storefront::{Cart, Checkout, TrackedOrder};

use crate::commands::Context;
use crate::config::AppConfig;

/// Place an order from `PRODUCT-ID:QTY` arguments.
///
/// # Errors
///
/// Returns an error for a malformed item argument, an unknown or
/// unavailable product, or a checkout rejection (empty cart, no table).
pub fn place(
    config: &AppConfig,
    table: Option<String>,
    items: &[String],
    notes: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;

    let mut cart = Cart::new();
    if let Some(table) = table.or_else(|| config.default_table.clone()) {
        cart.set_table(table);
    }

    for spec in items {
        let (id, qty) = parse_item(spec)?;
        let product = ctx
            .catalog
            .find(&id)
            .ok_or_else(|| format!("unknown product: {id}"))?;
        cart.add(&product)?;
        cart.set_quantity(&id, qty);
    }

    let checkout = Checkout::new(ctx.orders);
    let order = checkout.place_order(&mut cart, notes)?;

    info!("Order placed!");
    info!("  Id: {}", order.id);
    info!("  Table: {}", order.table);
    for item in &order.items {
        info!("  {} x{}  {}", item.name, item.qty, item.line_total());
    }
    info!("  Total: {}", order.total());

    Ok(())
}

/// Show the most recently placed order with its live status.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened or no order has
/// been placed yet.
pub fn track(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;

    let Some(tracked) = TrackedOrder::latest(&ctx.orders) else {
        return Err("no order placed yet in this data directory".into());
    };

    info!("Order {}", tracked.order.id);
    info!("  Table: {}", tracked.order.table);
    info!(
        "  Status: {} ({:.0}%)",
        tracked.status_label(),
        tracked.progress() * 100.0
    );
    info!("  Placed: {} minute(s) ago", tracked.elapsed_minutes(Utc::now()));
    info!("  Total: {}", tracked.total());
    if let Some(notes) = &tracked.order.notes {
        info!("  Notes: {notes}");
    }

    Ok(())
}

/// Parse a `PRODUCT-ID:QTY` item argument. A bare id means quantity 1.
fn parse_item(spec: &str) -> Result<(ProductId, u32), String> {
    match spec.split_once(':') {
        None => Ok((ProductId::new(spec.trim()), 1)),
        Some((id, qty)) => {
            let qty: u32 = qty
                .trim()
                .parse()
                .map_err(|_| format!("invalid quantity in item argument: {spec}"))?;
            if qty == 0 {
                return Err(format!("quantity must be at least 1: {spec}"));
            }
            Ok((ProductId::new(id.trim()), qty))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_with_quantity() {
        let (id, qty) = parse_item("PROD-001:2").unwrap();
        assert_eq!(id.as_str(), "PROD-001");
        assert_eq!(qty, 2);
    }

    #[test]
    fn test_parse_item_defaults_to_one() {
        let (id, qty) = parse_item("PROD-006").unwrap();
        assert_eq!(id.as_str(), "PROD-006");
        assert_eq!(qty, 1);
    }

    #[test]
    fn test_parse_item_rejects_bad_quantity() {
        assert!(parse_item("PROD-001:two").is_err());
        assert!(parse_item("PROD-001:0").is_err());
    }
}
