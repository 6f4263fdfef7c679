//! Stock-check contract.
//!
//! One round-trip per checkout attempt: the full cart goes up as a list of
//! `{productId, quantity}` pairs, and the server answers with a verdict per
//! line. The response is ephemeral - it only drives the reconciliation
//! dialog and is never persisted.

use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::types::ProductId;

/// One requested line in a stock check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<&CartLine> for StockLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            quantity: line.quantity,
        }
    }
}

/// Why a requested line cannot be fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockIssueReason {
    /// No units left at all.
    OutOfStock,
    /// Some units left, but fewer than requested.
    InsufficientQuantity,
}

/// A cart line the server reports as unfulfillable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableItem {
    pub product_id: ProductId,
    /// Server-side product name, shown in the resolution dialog.
    pub product_name: String,
    pub reason: StockIssueReason,
    /// Units actually available; present when the reason is
    /// `insufficient_quantity`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_quantity: Option<u32>,
    /// Units the cart asked for.
    pub requested_quantity: u32,
}

impl UnavailableItem {
    /// Human-readable explanation for the resolution dialog.
    #[must_use]
    pub fn message(&self) -> String {
        match (self.reason, self.available_quantity) {
            (StockIssueReason::OutOfStock, _) => {
                format!("{} is out of stock", self.product_name)
            }
            (StockIssueReason::InsufficientQuantity, Some(available)) => format!(
                "Only {available} available (you requested {})",
                self.requested_quantity
            ),
            (StockIssueReason::InsufficientQuantity, None) => format!(
                "Not enough stock for {} (you requested {})",
                self.product_name, self.requested_quantity
            ),
        }
    }
}

/// Server verdict for a stock check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCheckResponse {
    /// True when every requested line can be fulfilled as-is.
    pub all_available: bool,
    #[serde(default)]
    pub unavailable_items: Vec<UnavailableItem>,
}

impl StockCheckResponse {
    /// The IDs of every unavailable line.
    #[must_use]
    pub fn unavailable_ids(&self) -> Vec<ProductId> {
        self.unavailable_items
            .iter()
            .map(|item| item.product_id.clone())
            .collect()
    }
}
