//! Integration tests for durable cart persistence.
//!
//! These verify that the persisted snapshot round-trips across store
//! instances and that bad local data degrades to an empty cart instead of
//! failing.

use madeinside_core::types::{Price, ProductId};
use madeinside_integration_tests::{init_tracing, product};
use madeinside_storefront::cart::CartStore;
use madeinside_storefront::storage::LocalStorage;

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_snapshot_roundtrip_preserves_lines_and_order() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    store.add_item(&product("p3", 75), 1);
    store.add_item(&product("p1", 100), 2);
    store.add_item(&product("p2", 50), 4);
    drop(store);

    let reloaded = CartStore::open(LocalStorage::new(dir.path()));
    let cart = reloaded.snapshot();

    let lines: Vec<(&str, u32, Price)> = cart
        .lines()
        .iter()
        .map(|l| (l.product_id.as_str(), l.quantity, l.unit_price))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("p3", 1, Price::from(75)),
            ("p1", 2, Price::from(100)),
            ("p2", 4, Price::from(50)),
        ]
    );
    assert_eq!(reloaded.subtotal(), Price::from(475));
}

#[test]
fn test_snapshot_is_a_json_array_of_cart_lines() {
    let dir = tempfile::tempdir().expect("tempdir");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    store.add_item(&product("p1", 100), 2);

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).expect("snapshot file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    let lines = value.as_array().expect("top-level array");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["productId"], "p1");
    assert_eq!(lines[0]["quantity"], 2);
}

#[test]
fn test_clear_persists_an_empty_cart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    store.add_item(&product("p1", 100), 2);
    store.clear();
    drop(store);

    let reloaded = CartStore::open(LocalStorage::new(dir.path()));
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.subtotal(), Price::ZERO);
}

// =============================================================================
// Degraded-Data Tests
// =============================================================================

#[test]
fn test_corrupt_snapshot_loads_as_empty_cart() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("cart.json"), "<html>not json</html>").expect("write junk");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn test_foreign_snapshot_shape_loads_as_empty_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Valid JSON, wrong shape (object instead of a line array)
    std::fs::write(dir.path().join("cart.json"), r#"{"cart": []}"#).expect("write");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    assert!(store.is_empty());
}

#[test]
fn test_hand_edited_zero_quantity_line_is_dropped_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let snapshot = r#"[
        {"productId": "p1", "name": "Kept", "unitPrice": "10", "quantity": 1},
        {"productId": "p2", "name": "Dropped", "unitPrice": "10", "quantity": 0}
    ]"#;
    std::fs::write(dir.path().join("cart.json"), snapshot).expect("write");

    let store = CartStore::open(LocalStorage::new(dir.path()));
    let cart = store.snapshot();
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.lines()[0].product_id, ProductId::new("p1"));
}

#[test]
fn test_unwritable_storage_does_not_block_shopping() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");
    let blocked = dir.path().join("blocked");
    std::fs::write(&blocked, b"a file, not a directory").expect("write");

    let store = CartStore::open(LocalStorage::new(&blocked));
    store.add_item(&product("p1", 100), 1);
    store.update_quantity(&ProductId::new("p1"), 2);

    // Persistence failed every time, but the session cart is authoritative
    assert_eq!(store.item_count(), 3);
    assert_eq!(store.subtotal(), Price::from(300));
}
