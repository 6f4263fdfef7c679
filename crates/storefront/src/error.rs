//! Unified error handling for the storefront client.
//!
//! Every error shown to a shopper goes through [`AppError::user_message`],
//! which derives text from the structured payload when one exists and falls
//! back to a generic message. Raw transport, parse, or filesystem internals
//! never reach the end user.

use thiserror::Error;

use crate::api::ApiError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Checkout attempt failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Durable local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// User-facing text for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::Checkout(e) => match e {
                CheckoutError::Validation(errors) => errors
                    .iter()
                    .map(|f| f.message.clone())
                    .collect::<Vec<_>>()
                    .join(" "),
                CheckoutError::EmptyCart => "Your cart is empty.".to_owned(),
                CheckoutError::InProgress => {
                    "Your order is already being submitted.".to_owned()
                }
                CheckoutError::Api(api) => api.user_message(),
            },
            // Storage and config problems are developer-facing
            Self::Storage(_) | Self::Config(_) => {
                "Something went wrong. Please try again.".to_owned()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
