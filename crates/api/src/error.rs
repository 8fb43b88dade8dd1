//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, ApiError>`.
//!
//! Error responses carry a JSON body with a single `detail` field, which is
//! the shape the storefront renders in its toasts.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::seed::SeedError;
use crate::services::{CheckoutError, MercadoPagoError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Order creation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Mercado Pago operation failed.
    #[error("Payment provider error: {0}")]
    MercadoPago(#[from] MercadoPagoError),

    /// Catalog seeding failed.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Payment endpoint was called without a configured access token.
    #[error("MERCADO_PAGO_ACCESS_TOKEN not configured on the server")]
    PaymentNotConfigured,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Seed(_)
                | Self::MercadoPago(_)
                | Self::PaymentNotConfigured
                | Self::Checkout(CheckoutError::Repository(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) | Self::Seed(_) | Self::PaymentNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::MercadoPago(_) => StatusCode::BAD_GATEWAY,
            Self::Checkout(err) => match err {
                CheckoutError::EmptyOrder | CheckoutError::InvalidQuantity { .. } => {
                    StatusCode::BAD_REQUEST
                }
                CheckoutError::ProductNotFound { .. } => StatusCode::NOT_FOUND,
                CheckoutError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients. Checkout and
        // Mercado Pago messages are written for the customer and pass
        // through unchanged.
        let detail = match &self {
            Self::Database(_) | Self::Internal(_) | Self::Seed(_) => {
                "Internal server error".to_string()
            }
            Self::PaymentNotConfigured => self.to_string(),
            Self::MercadoPago(err) => err.to_string(),
            Self::Checkout(err) => match err {
                CheckoutError::Repository(_) => "Internal server error".to_string(),
                _ => err.to_string(),
            },
            Self::NotFound(detail) | Self::BadRequest(detail) => detail.clone(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
