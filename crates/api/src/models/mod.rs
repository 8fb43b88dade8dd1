//! Persistent domain models.
//!
//! Field names match the JSON contract the storefront frontend already
//! speaks (`produto_id`, `pedido_date`, ...), so the structs double as the
//! wire representation.

pub mod pedido;
pub mod produto;

pub use pedido::{CartItem, NewOrder, Order, OrderLine};
pub use produto::Product;
