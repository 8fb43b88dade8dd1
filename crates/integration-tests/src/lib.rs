//! Integration tests for the Choperia Digital backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Point CHOPERIA_DATABASE_URL at a scratch database, then:
//! cargo run -p choperia-cli -- migrate
//! cargo run -p choperia-api
//!
//! # Run integration tests (ignored by default)
//! cargo test -p choperia-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `produtos` - Catalog registration and lookup tests
//! - `pedidos` - Pedido creation, snapshot and listing tests
//! - `payments` - Mercado Pago preference tests

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CHOPERIA_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// HTTP client for talking to the API.
#[must_use]
pub fn client() -> Client {
    Client::new()
}
