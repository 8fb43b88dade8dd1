//! Choperia Digital API library.
//!
//! This crate provides the backend functionality as a library, allowing it
//! to be tested and reused (the `cli` crate drives migrations and seeding
//! through it).
//!
//! # Modules
//!
//! - [`config`] - Environment-based configuration
//! - [`db`] - `PostgreSQL` repositories for the catalog and orders
//! - [`services`] - Checkout pricing and the Mercado Pago client
//! - [`routes`] - Axum HTTP handlers
//! - [`seed`] - Initial menu catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
