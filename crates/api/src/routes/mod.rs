//! HTTP route handlers for the API.
//!
//! Collection paths keep the trailing slash the storefront's API client
//! sends; the non-canonical spelling without it is not served.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Produtos
//! GET  /produtos/              - List produtos (skip/limit pagination)
//! POST /produtos/              - Register a produto
//! GET  /produtos/{produto_id}  - Fetch a single produto
//! POST /initialize_produtos/   - Seed the initial menu
//!
//! # Pedidos
//! GET  /pedidos/               - List pedidos with embedded items
//! POST /pedidos/               - Create a pedido from the cart
//! GET  /pedidos/{pedido_id}    - Fetch a single pedido
//!
//! # Payments
//! POST /mp/create_preference/  - Create a Mercado Pago checkout preference
//! ```

pub mod payments;
pub mod pedidos;
pub mod produtos;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// `skip`/`limit` query parameters shared by the list endpoints.
///
/// Both fields are optional and clamped before reaching the database, so
/// a hostile query string cannot request a negative offset or an unbounded
/// page.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Pagination {
    skip: i64,
    limit: i64,
}

impl Pagination {
    /// Largest page a single request may ask for.
    const MAX_LIMIT: i64 = 1_000;

    /// Number of rows to skip, never negative.
    #[must_use]
    pub fn skip(&self) -> i64 {
        self.skip.max(0)
    }

    /// Page size, clamped to `0..=MAX_LIMIT`.
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.clamp(0, Self::MAX_LIMIT)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

/// Create the produto routes router.
pub fn produto_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/produtos/",
            get(produtos::list_produtos).post(produtos::create_produto),
        )
        .route("/produtos/{produto_id}", get(produtos::get_produto))
        .route("/initialize_produtos/", post(produtos::initialize_produtos))
}

/// Create the pedido routes router.
pub fn pedido_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pedidos/",
            get(pedidos::list_pedidos).post(pedidos::create_pedido),
        )
        .route("/pedidos/{pedido_id}", get(pedidos::get_pedido))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/mp/create_preference/", post(payments::create_preference))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(produto_routes())
        .merge(pedido_routes())
        .merge(payment_routes())
}
