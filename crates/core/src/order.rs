//! Order submission payloads.
//!
//! A cart maps 1:1 to an order: each [`CartLine`] becomes an [`OrderItem`]
//! carrying a point-in-time name snapshot and a computed line subtotal, and
//! the aggregate carries the customer's contact/delivery fields plus the cart
//! subtotal as `totalAmount`. Customer fields are validated client-side
//! before any network call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::types::{CustomerId, Email, OrderId, Price, ProductId};

/// One order line, derived from a cart line at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    /// Product name snapshot at the moment of checkout.
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Price,
    /// `unit_price * quantity`, precomputed for the backend.
    pub subtotal: Price,
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            product_name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            subtotal: line.line_total(),
        }
    }
}

/// A field that failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// User-facing message.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Contact and delivery fields collected on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub delivery_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CustomerDetails {
    /// Validate required fields before checkout touches the network.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per offending field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError {
                field: "fullName",
                message: "Name is required.".to_owned(),
            });
        }

        if let Err(e) = Email::parse(self.email.trim()) {
            errors.push(FieldError {
                field: "email",
                message: format!("Please enter a valid email address ({e})."),
            });
        }

        if self.delivery_address.trim().is_empty() {
            errors.push(FieldError {
                field: "deliveryAddress",
                message: "Delivery address is required.".to_owned(),
            });
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// A complete order submission, built from a validated cart snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub customer: CustomerDetails,
    pub items: Vec<OrderItem>,
    /// Cart subtotal at submission time.
    pub total_amount: Price,
    /// Set when the shopper is signed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
}

impl OrderDraft {
    /// Build a draft from a cart snapshot and validated customer details.
    #[must_use]
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        customer_id: Option<CustomerId>,
    ) -> Self {
        Self {
            items: cart.lines().iter().map(OrderItem::from).collect(),
            total_amount: cart.subtotal(),
            customer,
            customer_id,
        }
    }
}

/// Payment evidence uploaded with the order (e.g. a transfer receipt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEvidence {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Lifecycle status echoed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// Backend acknowledgement of a created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    /// Human-facing order number.
    pub order_number: String,
    pub total_amount: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
