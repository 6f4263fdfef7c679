//! Thin wrapper around the login endpoint.
//!
//! Session issuance and account management are backend concerns; the client
//! only exchanges credentials for a token and hands it to
//! [`AuthSession`](crate::session::AuthSession) for storage.

use madeinside_core::types::CustomerId;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{ApiClient, ApiError};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token issued by a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub token: String,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or rejected credentials (the
    /// backend answers 401 with a structured message).
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthToken, ApiError> {
        self.post_json(
            "auth/login",
            &LoginRequest {
                email,
                password: password.expose_secret(),
            },
        )
        .await
    }
}
