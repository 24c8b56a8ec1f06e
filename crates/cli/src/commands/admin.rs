//! Admin commands: session, catalog management, and the fulfillment board.

use std::sync::Arc;

use tracing::info;

use tabletap_admin::{AdminSession, CatalogAdmin, OrderBoard, SessionGuard};
use tabletap_core::{Order, OrderId, OrderStatus, ProductId};

use crate::commands::Context;
use crate::config::AppConfig;

/// Sign in and persist the shared login flag.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn login(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let guard = SessionGuard::new(Arc::clone(&ctx.storage), ctx.notifier.clone());
    let _session = guard.login();
    info!("Signed in as admin");
    Ok(())
}

/// Sign out and clear the shared login flag.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn logout(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let guard = SessionGuard::new(Arc::clone(&ctx.storage), ctx.notifier.clone());
    guard.logout();
    info!("Signed out");
    Ok(())
}

/// List the fulfillment board.
///
/// # Errors
///
/// Returns an error if not signed in.
pub fn orders(config: &AppConfig, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let _session = require_session(&ctx)?;
    let board = OrderBoard::new(Arc::clone(&ctx.orders));

    let active = board.active();
    info!("Active orders: {}", active.len());
    for order in &active {
        print_order(order);
    }

    if all {
        let completed = board.completed();
        info!("Completed orders: {}", completed.len());
        for order in &completed {
            print_order(order);
        }
    }

    Ok(())
}

/// Move an order to its next status.
///
/// # Errors
///
/// Returns an error if not signed in, or if the order is unknown or
/// already served.
pub fn advance(config: &AppConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let session = require_session(&ctx)?;
    let board = OrderBoard::new(Arc::clone(&ctx.orders));

    let id = OrderId::new(id);
    match board.advance(&session, &id) {
        Some(status) => {
            info!("{id} -> {status}");
            Ok(())
        }
        None => Err(format!("{id} not found or already served").into()),
    }
}

/// Set an order's status directly.
///
/// # Errors
///
/// Returns an error if not signed in or the order is unknown.
pub fn set_status(
    config: &AppConfig,
    id: &str,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let session = require_session(&ctx)?;
    let board = OrderBoard::new(Arc::clone(&ctx.orders));

    let id = OrderId::new(id);
    if board.set_status(&session, &id, status) {
        info!("{id} -> {status}");
        Ok(())
    } else {
        Err(format!("order not found: {id}").into())
    }
}

/// Clear the whole order history.
///
/// # Errors
///
/// Returns an error if not signed in.
pub fn clear_orders(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let session = require_session(&ctx)?;
    let board = OrderBoard::new(Arc::clone(&ctx.orders));

    board.clear_all(&session);
    info!("Order history cleared");
    Ok(())
}

/// Add a menu category.
///
/// # Errors
///
/// Returns an error if not signed in, or the name is blank or a duplicate.
pub fn add_category(config: &AppConfig, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let session = require_session(&ctx)?;
    let admin = CatalogAdmin::new(Arc::clone(&ctx.catalog));

    let category = admin.add_category(&session, name)?;
    info!("Added category: {category}");
    Ok(())
}

/// Flip a product's availability.
///
/// # Errors
///
/// Returns an error if not signed in or the product is unknown.
pub fn toggle(config: &AppConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::open(config)?;
    let session = require_session(&ctx)?;
    let admin = CatalogAdmin::new(Arc::clone(&ctx.catalog));

    let id = ProductId::new(id);
    if admin.toggle_availability(&session, &id) {
        let available = ctx.catalog.find(&id).is_some_and(|p| p.available);
        info!("{id} available: {available}");
        Ok(())
    } else {
        Err(format!("product not found: {id}").into())
    }
}

fn require_session(ctx: &Context) -> Result<AdminSession, Box<dyn std::error::Error>> {
    let guard = SessionGuard::new(Arc::clone(&ctx.storage), ctx.notifier.clone());
    guard
        .session()
        .ok_or_else(|| "not signed in; run `tabletap admin login` first".into())
}

fn print_order(order: &Order) {
    info!(
        "  {}  table {}  {}  {} item(s)  total {}",
        order.id,
        order.table,
        order.status,
        order.items.len(),
        order.total()
    );
}
