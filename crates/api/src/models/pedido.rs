//! Orders and their line snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use choperia_core::{OrderStatus, PedidoId, Price, ProdutoId};

/// One cart entry as sent by the frontend at checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    /// Product to order.
    pub produto_id: ProdutoId,
    /// Requested quantity. Validated to be positive before pricing.
    pub quantity: i32,
}

/// An order line as persisted and served.
///
/// Carries a snapshot of the product's name and unit price taken at
/// checkout time, so later catalog edits never rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct OrderLine {
    /// Product the snapshot was taken from.
    pub produto_id: ProdutoId,
    /// Product name at checkout time.
    pub produto_name: String,
    /// Unit price at checkout time.
    pub unit_price: Price,
    /// Quantity ordered.
    pub quantity: i32,
}

/// A priced order that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewOrder {
    /// Sum of `unit_price * quantity` over the lines.
    pub total_price: Decimal,
    /// Snapshot lines in cart order.
    pub lines: Vec<OrderLine>,
}

/// A persisted order.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Sequence-assigned identifier.
    pub id: PedidoId,
    /// When the order was placed.
    pub pedido_date: DateTime<Utc>,
    /// Total charged for the order.
    pub total_price: Price,
    /// Lifecycle status, always `pending` right after checkout.
    pub status: OrderStatus,
    /// Line snapshots in insertion order.
    pub items: Vec<OrderLine>,
}
