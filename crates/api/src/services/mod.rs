//! Business services sitting between the HTTP handlers and the repositories.

pub mod checkout;
pub mod mercado_pago;

pub use checkout::{CheckoutError, CheckoutService};
pub use mercado_pago::{MercadoPagoClient, MercadoPagoError, PreferenceRequest};
