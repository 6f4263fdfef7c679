//! The shared, durable cart store.
//!
//! One [`CartStore`] is created per session and handed by reference (cheap
//! `Clone` over `Arc`) to every page that reads or mutates the cart, so all
//! of them observe the same instance. Mutations are synchronous; persistence
//! to durable local storage is a fire-and-forget side effect performed after
//! each successful mutation.
//!
//! Persistence failures are silently degraded: the in-memory cart stays
//! authoritative for the session and the failure is only logged. This is a
//! deliberate tradeoff - shopping is never blocked on a non-critical storage
//! failure, at the cost of possible data loss across reloads.

use std::sync::{Arc, Mutex, PoisonError};

use madeinside_core::cart::Cart;
use madeinside_core::catalog::Product;
use madeinside_core::types::{Price, ProductId};

use crate::storage::{LocalStorage, keys};

/// Single source of truth for the client's shopping cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

#[derive(Debug)]
struct CartStoreInner {
    storage: LocalStorage,
    cart: Mutex<Cart>,
}

impl CartStore {
    /// Open the cart store, restoring the persisted snapshot if one exists.
    ///
    /// A missing snapshot yields an empty cart. A corrupt or foreign snapshot
    /// also yields an empty cart - it is logged, never thrown, so bad local
    /// data can never crash the application.
    #[must_use]
    pub fn open(storage: LocalStorage) -> Self {
        let cart = match storage.get::<Cart>(keys::CART) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cart snapshot");
                Cart::new()
            }
        };

        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                cart: Mutex::new(cart),
            }),
        }
    }

    fn with_cart<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        let cart = self
            .inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Run a mutation and persist the result if anything changed.
    fn mutate(&self, f: impl FnOnce(&mut Cart) -> bool) {
        let mut cart = self
            .inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if f(&mut cart) {
            self.persist(&cart);
        }
    }

    /// Persist after a successful mutation; failure degrades to a log line.
    fn persist(&self, cart: &Cart) {
        if let Err(e) = self.inner.storage.set(keys::CART, cart) {
            tracing::warn!(error = %e, "Cart persistence failed; keeping in-memory state");
        }
    }

    /// Add `quantity` units of a product (merging with an existing line).
    pub fn add_item(&self, product: &Product, quantity: u32) {
        self.mutate(|cart| {
            cart.add_product(product, quantity);
            true
        });
    }

    /// Apply a signed quantity delta to a line, clamped at a minimum of 1.
    /// No-op if the line does not exist.
    pub fn update_quantity(&self, product_id: &ProductId, delta: i32) {
        self.mutate(|cart| cart.update_quantity(product_id, delta));
    }

    /// Remove a line entirely. Idempotent.
    pub fn remove_item(&self, product_id: &ProductId) {
        self.mutate(|cart| cart.remove(product_id));
    }

    /// Remove every line named in `product_ids` (checkout reconciliation).
    pub fn remove_items(&self, product_ids: &[ProductId]) {
        self.mutate(|cart| {
            cart.remove_all(product_ids);
            true
        });
    }

    /// Empty the cart. Used only after a confirmed successful order.
    pub fn clear(&self) {
        self.mutate(|cart| {
            cart.clear();
            true
        });
    }

    /// Sum of `unit_price * quantity` over all lines, recomputed on read.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.with_cart(Cart::subtotal)
    }

    /// Total number of units across all lines, recomputed on read.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.with_cart(Cart::item_count)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// A point-in-time copy of the whole cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Clone::clone)
    }
}
