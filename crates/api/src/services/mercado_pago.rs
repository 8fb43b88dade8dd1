//! Mercado Pago Checkout Pro client.
//!
//! The API only creates payment preferences: the frontend sends the cart
//! and return URLs, the backend attaches the access token server-side and
//! relays the provider's raw response (including `init_point`), so the
//! token never reaches the browser.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timeout for preference creation calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when interacting with the Mercado Pago API.
///
/// The display strings of `Connect` and `Api` are served verbatim as the
/// error detail of the 502 response.
#[derive(Debug, Error)]
pub enum MercadoPagoError {
    /// The provider could not be reached.
    #[error("Erro ao conectar ao Mercado Pago: {0}")]
    Connect(#[from] reqwest::Error),

    /// The provider rejected the request.
    #[error("Mercado Pago error: {status} - {body}")]
    Api {
        /// HTTP status returned by the provider.
        status: u16,
        /// Raw response body returned by the provider.
        body: String,
    },

    /// A successful response could not be parsed as JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured access token cannot be used as a header value.
    #[error("Invalid access token format: {0}")]
    InvalidToken(String),
}

/// A checkout preference request, relayed to the provider as-is.
///
/// `items` is deliberately untyped: the provider validates it, and the
/// backend has no reason to re-model the provider's item schema. Optional
/// fields are stripped from the payload when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceRequest {
    /// Items to charge for, in the provider's own schema.
    pub items: serde_json::Value,
    /// Redirect URLs keyed by payment outcome (success, failure, pending).
    pub back_urls: HashMap<String, String>,
    /// Automatic redirect rule (e.g., "approved").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_return: Option<String>,
    /// Merchant-side reference attached to the preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

/// Mercado Pago API client.
#[derive(Clone)]
pub struct MercadoPagoClient {
    client: reqwest::Client,
    base_url: String,
}

impl MercadoPagoClient {
    /// Create a new Mercado Pago client.
    ///
    /// The access token is installed as a default `Authorization: Bearer`
    /// header so it is sent on every call without ever being logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(access_token: &SecretString, base_url: String) -> Result<Self, MercadoPagoError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", access_token.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| MercadoPagoError::InvalidToken(e.to_string()))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Create a checkout preference.
    ///
    /// Returns the provider's raw JSON response so the frontend can pick
    /// `init_point` or `sandbox_init_point` itself.
    ///
    /// # Errors
    ///
    /// Returns `MercadoPagoError::Connect` if the provider is unreachable,
    /// `MercadoPagoError::Api` if it answers with a non-success status, and
    /// `MercadoPagoError::Parse` if a success response is not JSON.
    pub async fn create_preference(
        &self,
        preference: &PreferenceRequest,
    ) -> Result<serde_json::Value, MercadoPagoError> {
        let url = format!("{}/checkout/preferences", self.base_url);

        let response = self.client.post(&url).json(preference).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MercadoPagoError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| MercadoPagoError::Parse(e.to_string()))
    }
}
