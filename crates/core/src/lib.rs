//! Made Inside Core - Shared types library.
//!
//! This crate provides the common types used across the Made Inside client
//! components:
//! - `storefront` - Public storefront client (cart, checkout, API wrappers)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`cart`] - The shopping cart aggregate and its invariants
//! - [`catalog`] - Read-only catalog shapes (products, categories, facilities)
//! - [`stock`] - Stock-check request/response contract
//! - [`order`] - Order submission payloads and customer validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod stock;
pub mod types;

pub use cart::{Cart, CartLine};
pub use types::*;
