//! Checkout stock reconciliation.
//!
//! The client-held cart may be stale relative to server inventory, so every
//! checkout attempt runs a two-phase flow: ask the backend to validate stock
//! for the full cart, and only on a clean verdict submit the order. The two
//! calls are never issued concurrently and the cart is cleared exactly once,
//! after a confirmed successful submission.
//!
//! State machine per attempt:
//!
//! ```text
//! Idle -> Validating -> Submitting -> Cleared            (happy path)
//!              |             |
//!              |             +-> Idle  (submission failed, cart intact)
//!              +-> AwaitingResolution  (stock conflict, no order submitted)
//!                       |
//!                       +-> Idle  (unavailable lines removed, or abandoned)
//! ```
//!
//! No explicit timeout is applied to either call; a hung request holds the
//! flow in `Validating`/`Submitting` (library/browser defaults apply, as in
//! the source system).

use madeinside_core::order::{
    CustomerDetails, FieldError, OrderConfirmation, OrderDraft, PaymentEvidence,
};
use madeinside_core::stock::{StockCheckResponse, StockLine, UnavailableItem};
use madeinside_core::types::CustomerId;
use thiserror::Error;
use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::cart::CartStore;

/// Seam between the reconciler and the two checkout endpoints.
///
/// Implemented by [`ApiClient`] in production and by fakes in tests.
pub trait CheckoutGateway {
    /// Validate current stock availability for every requested line.
    fn check_stock(
        &self,
        items: &[StockLine],
    ) -> impl Future<Output = Result<StockCheckResponse, ApiError>> + Send;

    /// Create the order.
    fn submit_order(
        &self,
        draft: &OrderDraft,
        evidence: Option<&PaymentEvidence>,
    ) -> impl Future<Output = Result<OrderConfirmation, ApiError>> + Send;
}

impl CheckoutGateway for ApiClient {
    async fn check_stock(&self, items: &[StockLine]) -> Result<StockCheckResponse, ApiError> {
        Self::check_stock(self, items).await
    }

    async fn submit_order(
        &self,
        draft: &OrderDraft,
        evidence: Option<&PaymentEvidence>,
    ) -> Result<OrderConfirmation, ApiError> {
        Self::create_order(self, draft, evidence).await
    }
}

/// Where a checkout attempt currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// No attempt in flight; submission is enabled.
    Idle,
    /// Stock check in flight.
    Validating,
    /// Stock conflict reported; submission is blocked until the shopper
    /// removes the unavailable lines or abandons the dialog.
    AwaitingResolution(Vec<UnavailableItem>),
    /// Order creation in flight.
    Submitting,
    /// Order accepted and cart cleared. Terminal for this attempt.
    Cleared,
}

/// Errors a checkout attempt can end in.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout fields failed client-side validation; nothing was sent.
    #[error("invalid checkout fields: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// The cart is empty; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// An attempt is already in flight; the submit control is disabled.
    #[error("a checkout attempt is already in progress")]
    InProgress,

    /// Stock check or order creation failed. Retryable; never interpreted as
    /// a stock conflict, and the cart is left intact.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// How a successful round through the flow ended.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Order accepted; the cart has been cleared.
    Completed(OrderConfirmation),
    /// One or more lines are unavailable; no order was submitted and the
    /// flow is holding in [`CheckoutState::AwaitingResolution`].
    StockConflict(Vec<UnavailableItem>),
}

/// Drives one checkout page's reconciliation flow against the shared cart.
#[derive(Debug)]
pub struct CheckoutFlow<G> {
    gateway: G,
    cart: CartStore,
    state: CheckoutState,
}

impl<G: CheckoutGateway> CheckoutFlow<G> {
    /// Create a flow over the session's shared cart store.
    #[must_use]
    pub const fn new(gateway: G, cart: CartStore) -> Self {
        Self {
            gateway,
            cart,
            state: CheckoutState::Idle,
        }
    }

    /// Current state, for driving the submit control and the dialog.
    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Run one submission attempt.
    ///
    /// Validates `customer` before touching the network, then stock-checks
    /// the cart as it stands at this moment. The same snapshot that was
    /// checked becomes the order payload, so the submitted items always match
    /// the verdict. On a conflict the flow parks in `AwaitingResolution` and
    /// no order is submitted.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`] before any network call
    /// - [`CheckoutError::EmptyCart`] when there is nothing to order
    /// - [`CheckoutError::InProgress`] while a previous attempt is in flight
    /// - [`CheckoutError::Api`] on either round-trip failing; the cart is
    ///   never partially cleared and the attempt may simply be retried
    #[instrument(skip_all)]
    pub async fn submit(
        &mut self,
        customer: &CustomerDetails,
        customer_id: Option<CustomerId>,
        evidence: Option<&PaymentEvidence>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if matches!(
            self.state,
            CheckoutState::Validating | CheckoutState::Submitting
        ) {
            return Err(CheckoutError::InProgress);
        }

        // Inline validation errors never reach the state machine
        customer.validate().map_err(CheckoutError::Validation)?;

        let snapshot = self.cart.snapshot();
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = CheckoutState::Validating;
        let stock_lines: Vec<StockLine> = snapshot.lines().iter().map(StockLine::from).collect();

        let verdict = match self.gateway.check_stock(&stock_lines).await {
            Ok(verdict) => verdict,
            Err(e) => {
                self.state = CheckoutState::Idle;
                return Err(e.into());
            }
        };

        if !verdict.all_available {
            tracing::info!(
                unavailable = verdict.unavailable_items.len(),
                "Stock conflict; holding checkout for resolution"
            );
            self.state = CheckoutState::AwaitingResolution(verdict.unavailable_items.clone());
            return Ok(CheckoutOutcome::StockConflict(verdict.unavailable_items));
        }

        self.state = CheckoutState::Submitting;
        let draft = OrderDraft::from_cart(&snapshot, customer.clone(), customer_id);

        match self.gateway.submit_order(&draft, evidence).await {
            Ok(confirmation) => {
                // Clear only after the backend confirmed the order
                self.cart.clear();
                self.state = CheckoutState::Cleared;
                tracing::info!(order_number = %confirmation.order_number, "Order placed");
                Ok(CheckoutOutcome::Completed(confirmation))
            }
            Err(e) => {
                self.state = CheckoutState::Idle;
                Err(e.into())
            }
        }
    }

    /// Resolve a stock conflict by dropping every unavailable line from the
    /// cart, returning the flow to `Idle`.
    ///
    /// No-op unless the flow is in `AwaitingResolution`.
    pub fn remove_unavailable(&mut self) {
        if let CheckoutState::AwaitingResolution(items) = &self.state {
            let ids: Vec<_> = items.iter().map(|i| i.product_id.clone()).collect();
            self.cart.remove_items(&ids);
            self.state = CheckoutState::Idle;
        }
    }

    /// Abandon the resolution dialog, leaving the cart unchanged and
    /// returning the flow to `Idle`.
    ///
    /// No-op unless the flow is in `AwaitingResolution`.
    pub fn abandon(&mut self) {
        if matches!(self.state, CheckoutState::AwaitingResolution(_)) {
            self.state = CheckoutState::Idle;
        }
    }
}
