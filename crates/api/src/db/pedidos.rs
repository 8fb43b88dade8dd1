//! Order repository.
//!
//! Orders are an aggregate of a `pedidos` header row plus `pedido_items`
//! snapshot rows. Creation writes both inside a single transaction so a
//! failed line insert can never leave a header without its items.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use choperia_core::{OrderStatus, PedidoId, Price, ProdutoId};

use super::RepositoryError;
use crate::models::{NewOrder, Order, OrderLine};

/// Header row of an order, without its lines.
#[derive(Debug, sqlx::FromRow)]
struct PedidoRow {
    id: PedidoId,
    pedido_date: DateTime<Utc>,
    total_price: Price,
    status: OrderStatus,
}

impl PedidoRow {
    fn into_order(self, items: Vec<OrderLine>) -> Order {
        Order {
            id: self.id,
            pedido_date: self.pedido_date,
            total_price: self.total_price,
            status: self.status,
            items,
        }
    }
}

/// Line row joined with its owning order, used when listing.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    pedido_id: PedidoId,
    produto_id: ProdutoId,
    produto_name: String,
    unit_price: Price,
    quantity: i32,
}

impl ItemRow {
    fn into_line(self) -> OrderLine {
        OrderLine {
            produto_id: self.produto_id,
            produto_name: self.produto_name,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a priced order atomically.
    ///
    /// The header and all line snapshots are written in one transaction,
    /// and the order enters the `pending` status. The caller is expected
    /// to have validated and priced the lines.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; nothing is
    /// persisted in that case.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PedidoRow>(
            r"
            INSERT INTO pedidos (total_price, status)
            VALUES ($1, $2)
            RETURNING id, pedido_date, total_price, status
            ",
        )
        .bind(order.total_price)
        .bind(OrderStatus::Pending)
        .fetch_one(&mut *tx)
        .await?;

        for line in &order.lines {
            sqlx::query(
                r"
                INSERT INTO pedido_items (pedido_id, produto_id, produto_name, unit_price, quantity)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(row.id)
            .bind(&line.produto_id)
            .bind(&line.produto_name)
            .bind(line.unit_price)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(row.into_order(order.lines.clone()))
    }

    /// Get an order with its lines by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: PedidoId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query_as::<_, PedidoRow>(
            r"
            SELECT id, pedido_date, total_price, status
            FROM pedidos
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT pedido_id, produto_id, produto_name, unit_price, quantity
            FROM pedido_items
            WHERE pedido_id = $1
            ORDER BY id
            ",
        )
        .bind(row.id)
        .fetch_all(self.pool)
        .await?
        .into_iter()
        .map(ItemRow::into_line)
        .collect();

        Ok(Some(row.into_order(items)))
    }

    /// List orders with their lines, ordered by ID.
    ///
    /// Lines for the whole page are fetched in one query and grouped in
    /// memory, avoiding a query per order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, PedidoRow>(
            r"
            SELECT id, pedido_date, total_price, status
            FROM pedidos
            ORDER BY id
            OFFSET $1 LIMIT $2
            ",
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|row| row.id.as_i32()).collect();

        let items = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT pedido_id, produto_id, produto_name, unit_price, quantity
            FROM pedido_items
            WHERE pedido_id = ANY($1)
            ORDER BY pedido_id, id
            ",
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        let mut lines_by_pedido: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        for item in items {
            lines_by_pedido
                .entry(item.pedido_id.as_i32())
                .or_default()
                .push(item.into_line());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = lines_by_pedido.remove(&row.id.as_i32()).unwrap_or_default();
                row.into_order(items)
            })
            .collect())
    }
}
