//! Stock check and order creation endpoints.
//!
//! The two network round-trips of the checkout flow. The stock check is
//! plain JSON; order creation is multipart because it can carry a
//! payment-evidence file alongside the order fields.

use madeinside_core::order::{OrderConfirmation, OrderDraft, PaymentEvidence};
use madeinside_core::stock::{StockCheckResponse, StockLine};
use reqwest::multipart::{Form, Part};
use tracing::instrument;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Ask the backend whether every requested line can currently be
    /// fulfilled.
    ///
    /// The request body is the bare array of `{productId, quantity}` lines.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparseable response. A
    /// conflict (`allAvailable = false`) is a successful response, not an
    /// error.
    #[instrument(skip(self, items), fields(line_count = items.len()))]
    pub async fn check_stock(&self, items: &[StockLine]) -> Result<StockCheckResponse, ApiError> {
        self.post_json("orders/stock-check", &items).await
    }

    /// Submit an order as a multipart form.
    ///
    /// Form fields: the customer contact/delivery fields, `totalAmount`, the
    /// order items as one serialized JSON array under `items`, an optional
    /// payment-evidence file part, and `customerId` when the shopper is
    /// signed in.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a rejected order, or an
    /// unparseable confirmation.
    #[instrument(skip(self, draft, evidence), fields(item_count = draft.items.len()))]
    pub async fn create_order(
        &self,
        draft: &OrderDraft,
        evidence: Option<&PaymentEvidence>,
    ) -> Result<OrderConfirmation, ApiError> {
        let items = serde_json::to_string(&draft.items)
            .map_err(|e| ApiError::Parse(format!("order items: {e}")))?;

        let mut form = Form::new()
            .text("fullName", draft.customer.full_name.clone())
            .text("email", draft.customer.email.clone())
            .text("deliveryAddress", draft.customer.delivery_address.clone())
            .text("totalAmount", draft.total_amount.to_string())
            .text("items", items);

        if let Some(phone) = &draft.customer.phone {
            form = form.text("phone", phone.clone());
        }
        if let Some(notes) = &draft.customer.notes {
            form = form.text("notes", notes.clone());
        }
        if let Some(customer_id) = &draft.customer_id {
            form = form.text("customerId", customer_id.to_string());
        }
        if let Some(evidence) = evidence {
            let part = Part::bytes(evidence.bytes.clone())
                .file_name(evidence.file_name.clone())
                .mime_str(&evidence.content_type)
                .map_err(|e| ApiError::Parse(format!("payment evidence: {e}")))?;
            form = form.part("paymentEvidence", part);
        }

        self.post_multipart("orders", form).await
    }
}
