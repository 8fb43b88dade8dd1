//! Pedido routes.
//!
//! A pedido is created from the cart in a single request and is immutable
//! afterwards; reads always embed the line items.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use choperia_core::PedidoId;
use serde::Deserialize;

use crate::db::OrderRepository;
use crate::error::{ApiError, Result};
use crate::models::{CartItem, Order};
use crate::routes::Pagination;
use crate::services::CheckoutService;
use crate::state::AppState;

/// Request to create a pedido.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Cart entries, in the order the customer added them.
    pub items: Vec<CartItem>,
}

/// Create a pedido from the cart.
///
/// POST /pedidos/
///
/// Prices and produto names are copied into the pedido at creation time,
/// so later catalog edits do not rewrite order history.
///
/// # Errors
///
/// Returns `ApiError::Checkout` when the cart is empty, has a non-positive
/// quantity or references an unregistered produto, and `ApiError::Database`
/// if persistence fails.
pub async fn create_pedido(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    let pedido = CheckoutService::new(state.pool())
        .create_order(&request.items)
        .await?;

    tracing::info!(
        pedido_id = %pedido.id,
        total_price = %pedido.total_price,
        items = pedido.items.len(),
        "pedido created"
    );

    Ok((StatusCode::CREATED, Json(pedido)))
}

/// List pedidos with their items.
///
/// GET /pedidos/
///
/// # Errors
///
/// Returns `ApiError::Database` if the query fails.
pub async fn list_pedidos(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Order>>> {
    let pedidos = OrderRepository::new(state.pool())
        .list(pagination.skip(), pagination.limit())
        .await?;

    Ok(Json(pedidos))
}

/// Fetch a single pedido.
///
/// GET /pedidos/{pedido_id}
///
/// A path segment that is not a pedido number is reported the same way as
/// an unknown one.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when no pedido has this ID and
/// `ApiError::Database` if the lookup fails.
pub async fn get_pedido(
    State(state): State<AppState>,
    Path(pedido_id): Path<String>,
) -> Result<Json<Order>> {
    let not_found = || ApiError::NotFound("Pedido not found".to_string());

    let pedido_id = pedido_id
        .parse::<i32>()
        .map(PedidoId::from)
        .map_err(|_| not_found())?;

    let pedido = OrderRepository::new(state.pool())
        .get(pedido_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(pedido))
}
