//! REST API client for the Made Inside backend.
//!
//! All network access is JSON over HTTPS against the backend configured in
//! [`StorefrontConfig::api_url`](crate::config::StorefrontConfig). Every
//! module here is a thin wrapper around a single REST resource; none of them
//! add caching or retry logic of their own.
//!
//! # Modules
//!
//! - [`auth`] - login (token issuance is server-side; we only store the token)
//! - [`catalog`] - read-only products, categories, and facilities
//! - [`checkout`] - stock check and order creation

pub mod auth;
pub mod catalog;
pub mod checkout;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The requested URL path could not be joined onto the base URL.
    #[error("Invalid endpoint path: {0}")]
    InvalidPath(String),
}

impl ApiError {
    /// User-facing text for this error.
    ///
    /// Derived from the structured error payload when the backend sent one;
    /// otherwise a generic message. Raw transport or parse internals are
    /// never shown to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

/// Error payload shape the backend uses for failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for the Made Inside REST backend.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Create a client for the given backend base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidPath(format!("{path}: {e}")))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// GET `path` and decode the JSON response.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.client.get(self.endpoint(path)?).query(query);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    /// POST a JSON body to `path` and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.endpoint(path)?).json(body);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }

    /// POST a multipart form to `path` and decode the JSON response.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.endpoint(path)?).multipart(form);
        let response = self.authorize(request).send().await?;
        decode_response(response).await
    }
}

/// Turn a response into either a decoded body or a structured [`ApiError`].
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Prefer the structured error payload when the backend sent one
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map_or_else(|_| body.chars().take(200).collect(), |b| b.message);
        tracing::error!(status = %status, message = %message, "API request failed");
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "Failed to parse API response"
        );
        ApiError::Parse(e.to_string())
    })
}
