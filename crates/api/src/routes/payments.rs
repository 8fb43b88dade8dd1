//! Payment routes.
//!
//! The API's only payment responsibility is creating Mercado Pago checkout
//! preferences with the server-held access token. Everything after the
//! redirect happens between the customer and Mercado Pago.

use axum::{Json, extract::State};

use crate::error::{ApiError, Result};
use crate::services::PreferenceRequest;
use crate::state::AppState;

/// Create a Mercado Pago checkout preference.
///
/// POST /mp/create_preference/
///
/// Returns the provider's response unchanged; the storefront reads
/// `init_point` from it to start the redirect.
///
/// # Errors
///
/// Returns `ApiError::PaymentNotConfigured` when no access token is set and
/// `ApiError::MercadoPago` when the provider call fails.
pub async fn create_preference(
    State(state): State<AppState>,
    Json(preference): Json<PreferenceRequest>,
) -> Result<Json<serde_json::Value>> {
    let client = state.mercado_pago().ok_or(ApiError::PaymentNotConfigured)?;

    let response = client.create_preference(&preference).await?;

    tracing::info!("mercado pago preference created");

    Ok(Json(response))
}
