//! Integration tests for the Made Inside client.
//!
//! These tests exercise the storefront crates together: the cart store over
//! real (temporary) durable storage, and the checkout reconciliation flow
//! over a scripted gateway.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p madeinside-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - durable cart snapshots across store instances
//! - `checkout_flow` - two-phase stock reconciliation end to end

#![cfg_attr(not(test), forbid(unsafe_code))]

use madeinside_core::catalog::Product;
use madeinside_core::types::{Price, ProductId};

/// Initialize tracing once for test output (respects `RUST_LOG`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "madeinside_storefront=debug".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build a catalog product for test carts.
#[must_use]
pub fn product(id: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        name_secondary: Some(format!("Producto {id}")),
        description: None,
        price: Price::from(price),
        image: Some(format!("images/{id}.jpg")),
        stock: 10,
        category_id: None,
        subcategory_id: None,
        facility_id: None,
    }
}
