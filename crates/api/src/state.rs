//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::services::{MercadoPagoClient, MercadoPagoError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    mercado_pago: Option<MercadoPagoClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The Mercado Pago client is only built when an access token is
    /// configured. Without one the API still serves the catalog and
    /// pedidos; the payment endpoint reports the missing token.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured access token cannot be used to
    /// build the payment client.
    pub fn new(config: ApiConfig, pool: PgPool) -> Result<Self, MercadoPagoError> {
        let mercado_pago = config
            .mercado_pago
            .access_token
            .as_ref()
            .map(|token| MercadoPagoClient::new(token, config.mercado_pago.base_url.clone()))
            .transpose()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mercado_pago,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the Mercado Pago client, if an access token was configured.
    #[must_use]
    pub fn mercado_pago(&self) -> Option<&MercadoPagoClient> {
        self.inner.mercado_pago.as_ref()
    }
}
