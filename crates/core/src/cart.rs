//! The shopping cart aggregate.
//!
//! A [`Cart`] is an insertion-ordered collection of [`CartLine`]s, uniquely
//! keyed by product ID. Display names, prices, and images are snapshots taken
//! when the product was added; they are not refreshed until checkout, when
//! the server re-validates stock (and, implicitly, prices) before an order is
//! committed.
//!
//! # Invariants
//!
//! - At most one line per distinct product ID; re-adding a product increments
//!   the existing line's quantity instead of appending a duplicate.
//! - Every present line has `quantity >= 1`. Decrements clamp at 1; a line is
//!   only ever dropped by an explicit removal.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product entry in the shopping cart.
///
/// Serialized as camelCase JSON, both for the persisted snapshot and for the
/// order payload derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier, unique within the cart.
    pub product_id: ProductId,
    /// Display name snapshot taken at add-time.
    pub name: String,
    /// Optional localized secondary name snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_secondary: Option<String>,
    /// Unit price snapshot taken at add-time.
    pub unit_price: Price,
    /// Number of units, always >= 1.
    pub quantity: u32,
    /// Optional display-only image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Total price for this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            name_secondary: product.name_secondary.clone(),
            unit_price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }
}

/// An insertion-ordered collection of cart lines.
///
/// All derived values (`subtotal`, `item_count`) are recomputed from the
/// current lines on every read; nothing is cached.
///
/// Serializes as a bare array of lines. Deserialization goes through
/// [`Cart::from_lines`], so zero-quantity lines in a hand-edited snapshot
/// are dropped rather than admitted into a live cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<CartLine>::deserialize(deserializer).map(Self::from_lines)
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Rebuild a cart from a persisted snapshot of lines.
    ///
    /// Lines with a would-be-zero quantity are dropped rather than kept at
    /// zero, so the quantity invariant holds even for hand-edited snapshots.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity >= 1).collect(),
        }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Look up a line by product ID.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If a line with the same product ID already exists its quantity is
    /// incremented; otherwise a new line is appended with snapshots of the
    /// product's current name(s), price, and image. A zero `quantity` is
    /// treated as 1. No stock check happens here - stock is only verified at
    /// checkout.
    pub fn add_product(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            let mut line = CartLine::from(product);
            line.quantity = quantity;
            self.lines.push(line);
        }
    }

    /// Apply a signed quantity delta to the named line, clamped to a minimum
    /// of 1.
    ///
    /// A no-op if the line does not exist. Returns `true` if a line was
    /// changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i32) -> bool {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| &l.product_id == product_id)
        else {
            return false;
        };

        let updated = i64::from(line.quantity) + i64::from(delta);
        let clamped = u32::try_from(updated.max(1)).unwrap_or(u32::MAX);
        if clamped == line.quantity {
            return false;
        }
        line.quantity = clamped;
        true
    }

    /// Remove the line for a product entirely, regardless of quantity.
    ///
    /// Idempotent: removing an absent line is a no-op. Returns `true` if a
    /// line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() != before
    }

    /// Remove every line named in `product_ids`.
    ///
    /// Used by checkout reconciliation to drop unavailable lines in one step.
    pub fn remove_all(&mut self, product_ids: &[ProductId]) {
        self.lines.retain(|l| !product_ids.contains(&l.product_id));
    }

    /// Empty the entire cart.
    ///
    /// Called exactly once per successful order submission.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            name_secondary: None,
            description: None,
            price: Price::from(price),
            image: None,
            stock: 10,
            category_id: None,
            subcategory_id: None,
            facility_id: None,
        }
    }

    #[test]
    fn test_add_merges_lines_by_product_id() {
        let mut cart = Cart::new();
        let p1 = product("p1", 100);

        for _ in 0..5 {
            cart.add_product(&p1, 1);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_add_distinct_products_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(&product("p2", 50), 1);
        cart.add_product(&product("p1", 100), 2);
        cart.add_product(&product("p3", 75), 1);
        // re-adding p2 must not change its position
        cart.add_product(&product("p2", 50), 1);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_add_zero_quantity_treated_as_one() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_snapshots_price_at_add_time() {
        let mut cart = Cart::new();
        let mut p1 = product("p1", 100);
        cart.add_product(&p1, 1);

        // A later price change does not affect the snapshot
        p1.price = Price::from(999);
        cart.add_product(&p1, 1);

        assert_eq!(cart.lines()[0].unit_price, Price::from(100));
        assert_eq!(cart.subtotal(), Price::from(200));
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 2);

        let id = ProductId::new("p1");
        assert!(cart.update_quantity(&id, -1));
        assert_eq!(cart.line(&id).map(|l| l.quantity), Some(1));

        // Further decrements leave the line at 1, never remove it
        assert!(!cart.update_quantity(&id, -1));
        assert!(!cart.update_quantity(&id, -100));
        assert_eq!(cart.line(&id).map(|l| l.quantity), Some(1));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 1);
        assert!(!cart.update_quantity(&ProductId::new("absent"), 3));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 3);

        let id = ProductId::new("p1");
        assert!(cart.remove(&id));
        assert!(!cart.remove(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_all() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 1);
        cart.add_product(&product("p2", 50), 1);
        cart.add_product(&product("p3", 25), 1);

        cart.remove_all(&[ProductId::new("p1"), ProductId::new("p3")]);
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn test_subtotal_and_item_count() {
        let mut cart = Cart::new();
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);

        cart.add_product(&product("p1", 100), 2);
        cart.add_product(&product("p2", 30), 3);
        assert_eq!(cart.subtotal(), Price::from(290));
        assert_eq!(cart.item_count(), 5);

        cart.update_quantity(&ProductId::new("p2"), -2);
        assert_eq!(cart.subtotal(), Price::from(230));

        cart.remove(&ProductId::new("p1"));
        assert_eq!(cart.subtotal(), Price::from(30));

        cart.clear();
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_from_lines_drops_zero_quantity() {
        let mut line = CartLine::from(&product("p1", 100));
        line.quantity = 0;
        let cart = Cart::from_lines(vec![line, CartLine::from(&product("p2", 50))]);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id.as_str(), "p2");
    }

    #[test]
    fn test_deserialize_drops_zero_quantity_lines() {
        let json = r#"[
            {"productId": "p1", "name": "Kept", "unitPrice": "10", "quantity": 2},
            {"productId": "p2", "name": "Dropped", "unitPrice": "10", "quantity": 0}
        ]"#;

        let cart: Cart = serde_json::from_str(json).expect("deserialize");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id.as_str(), "p1");
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_serde_snapshot_roundtrip() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 100), 2);
        cart.add_product(&product("p2", 50), 1);

        let json = serde_json::to_string(&cart).expect("serialize");
        let restored: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, cart);
    }
}
