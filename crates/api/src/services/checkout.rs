//! Checkout: turn a cart into a priced, persisted order.
//!
//! Pricing never trusts client-side amounts. Each line snapshots the
//! product's current name and price from the catalog, and the total is the
//! sum of `unit_price * quantity` computed here.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use choperia_core::ProdutoId;

use crate::db::{OrderRepository, ProductRepository, RepositoryError};
use crate::models::{CartItem, NewOrder, Order, OrderLine, Product};

/// Errors that can occur while building an order from a cart.
///
/// The display strings of the client-caused variants are served verbatim
/// as the error detail, so they are written in the storefront's language.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no items.
    #[error("O pedido deve ter pelo menos um item.")]
    EmptyOrder,

    /// A cart entry references a product that is not in the catalog.
    #[error("Produto com ID '{produto_id}' não encontrado.")]
    ProductNotFound {
        /// The unknown product ID.
        produto_id: ProdutoId,
    },

    /// A cart entry has a zero or negative quantity.
    #[error("Quantidade inválida para o produto '{produto_id}': {quantity}")]
    InvalidQuantity {
        /// The product whose quantity was rejected.
        produto_id: ProdutoId,
        /// The rejected quantity.
        quantity: i32,
    },

    /// A catalog lookup or the order insert failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Price a cart against a catalog snapshot.
///
/// Items are processed in cart order; the first offending item decides the
/// error. Duplicate entries for the same product each become their own
/// line, exactly as sent.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyOrder`] for an empty cart,
/// [`CheckoutError::InvalidQuantity`] for a non-positive quantity, and
/// [`CheckoutError::ProductNotFound`] when the catalog has no entry for an
/// item.
pub fn price_cart(
    items: &[CartItem],
    catalog: &HashMap<ProdutoId, Product>,
) -> Result<NewOrder, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyOrder);
    }

    let mut total_price = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        if item.quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity {
                produto_id: item.produto_id.clone(),
                quantity: item.quantity,
            });
        }

        let produto = catalog
            .get(&item.produto_id)
            .ok_or_else(|| CheckoutError::ProductNotFound {
                produto_id: item.produto_id.clone(),
            })?;

        total_price += produto.price.amount() * Decimal::from(item.quantity);

        lines.push(OrderLine {
            produto_id: produto.id.clone(),
            produto_name: produto.name.clone(),
            unit_price: produto.price,
            quantity: item.quantity,
        });
    }

    Ok(NewOrder { total_price, lines })
}

/// Service that prices carts against the live catalog and persists orders.
pub struct CheckoutService<'a> {
    pool: &'a PgPool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create an order from the given cart items.
    ///
    /// Resolves every item against the catalog, prices the cart, and
    /// persists the order atomically with `pending` status.
    ///
    /// # Errors
    ///
    /// Returns the pricing errors of [`price_cart`], or
    /// [`CheckoutError::Repository`] if the database fails. A failed
    /// order persists nothing.
    pub async fn create_order(&self, items: &[CartItem]) -> Result<Order, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        let produtos = ProductRepository::new(self.pool);
        let mut catalog: HashMap<ProdutoId, Product> = HashMap::new();

        for item in items {
            // Same precedence as price_cart: a bad quantity on an item is
            // reported before its catalog lookup.
            if item.quantity <= 0 {
                return Err(CheckoutError::InvalidQuantity {
                    produto_id: item.produto_id.clone(),
                    quantity: item.quantity,
                });
            }

            if catalog.contains_key(&item.produto_id) {
                continue;
            }

            let produto = produtos.get(&item.produto_id).await?.ok_or_else(|| {
                CheckoutError::ProductNotFound {
                    produto_id: item.produto_id.clone(),
                }
            })?;
            catalog.insert(item.produto_id.clone(), produto);
        }

        let priced = price_cart(items, &catalog)?;

        let order = OrderRepository::new(self.pool).create(&priced).await?;
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use choperia_core::{Category, Price};

    use super::*;

    fn produto(id: &str, name: &str, cents: u32) -> Product {
        Product {
            id: ProdutoId::parse(id).unwrap(),
            name: name.to_string(),
            description: format!("{name} description"),
            price: Price::from_cents(cents),
            image: "🍺".to_string(),
            category: Category::Beer,
        }
    }

    fn catalog(products: Vec<Product>) -> HashMap<ProdutoId, Product> {
        products.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    fn item(id: &str, quantity: i32) -> CartItem {
        CartItem {
            produto_id: ProdutoId::parse(id).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_price_cart_sums_line_totals() {
        let catalog = catalog(vec![
            produto("A", "Chopp A", 500),
            produto("B", "Chopp B", 350),
        ]);
        let items = [item("A", 2), item("B", 1)];

        let order = price_cart(&items, &catalog).unwrap();

        assert_eq!(order.total_price.to_string(), "13.50");
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines[0].produto_name, "Chopp A");
        assert_eq!(order.lines[0].unit_price, Price::from_cents(500));
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.lines[1].produto_name, "Chopp B");
        assert_eq!(order.lines[1].quantity, 1);
    }

    #[test]
    fn test_price_cart_rejects_empty_cart() {
        let catalog = catalog(vec![]);

        assert!(matches!(
            price_cart(&[], &catalog),
            Err(CheckoutError::EmptyOrder)
        ));
    }

    #[test]
    fn test_price_cart_names_missing_product() {
        let catalog = catalog(vec![produto("A", "Chopp A", 500)]);
        let items = [item("A", 1), item("sumiu", 1)];

        let err = price_cart(&items, &catalog).unwrap_err();
        assert!(matches!(
            &err,
            CheckoutError::ProductNotFound { produto_id } if produto_id.as_str() == "sumiu"
        ));
        assert_eq!(err.to_string(), "Produto com ID 'sumiu' não encontrado.");
    }

    #[test]
    fn test_price_cart_rejects_non_positive_quantities() {
        let catalog = catalog(vec![produto("A", "Chopp A", 500)]);

        for quantity in [0, -1] {
            let items = [item("A", quantity)];
            assert!(matches!(
                price_cart(&items, &catalog),
                Err(CheckoutError::InvalidQuantity { quantity: q, .. }) if q == quantity
            ));
        }
    }

    #[test]
    fn test_price_cart_invalid_quantity_wins_over_missing_product() {
        let catalog = catalog(vec![]);
        let items = [item("sumiu", 0)];

        assert!(matches!(
            price_cart(&items, &catalog),
            Err(CheckoutError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_price_cart_keeps_duplicate_entries_as_separate_lines() {
        let catalog = catalog(vec![produto("A", "Chopp A", 500)]);
        let items = [item("A", 1), item("A", 3)];

        let order = price_cart(&items, &catalog).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_price.to_string(), "20.00");
    }

    #[test]
    fn test_price_cart_zero_price_product() {
        let catalog = catalog(vec![produto("brinde", "Brinde", 0)]);
        let items = [item("brinde", 5)];

        let order = price_cart(&items, &catalog).unwrap();
        assert_eq!(order.total_price, Decimal::ZERO);
    }
}
