//! Made Inside Storefront - client core for the public storefront.
//!
//! This crate provides the non-UI half of the storefront as a library: the
//! durable cart store, the checkout stock-reconciliation flow, and the thin
//! REST wrappers the screens are wired to. Rendering and routing live in the
//! (external) UI shell that consumes this crate.
//!
//! # Architecture
//!
//! - One [`cart::CartStore`] instance per session, shared by handle across
//!   every page that reads or mutates the cart, persisted to durable local
//!   storage on every mutation
//! - A two-phase [`checkout::CheckoutFlow`]: stock-check first, order
//!   submission only on a clean verdict, cart cleared only on success
//! - [`api::ApiClient`] as the single JSON-over-HTTPS gateway to the REST
//!   backend; every wrapper is a thin call around one resource

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use cart::CartStore;
pub use checkout::{CheckoutFlow, CheckoutState};
pub use config::StorefrontConfig;
