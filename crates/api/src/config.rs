//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CHOPERIA_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL` when a hosting platform injects it)
//!
//! ## Optional
//! - `CHOPERIA_HOST` - Bind address (default: 127.0.0.1)
//! - `CHOPERIA_PORT` - Listen port (default: 8000)
//! - `CHOPERIA_ALLOWED_ORIGINS` - Comma-separated CORS origins
//!   (default: the Vite dev server on localhost:8080)
//! - `MERCADO_PAGO_ACCESS_TOKEN` - Mercado Pago access token; without it the
//!   payment preference endpoint refuses requests
//! - `MERCADO_PAGO_BASE_URL` - Override the Mercado Pago API base URL
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default CORS origins for local development (Vite dev server).
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
    /// Mercado Pago configuration
    pub mercado_pago: MercadoPagoConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., production, staging)
    pub sentry_environment: Option<String>,
}

/// Mercado Pago configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct MercadoPagoConfig {
    /// Access token used as a Bearer credential; `None` disables the
    /// payment preference endpoint
    pub access_token: Option<SecretString>,
    /// API base URL (overridable for tests against a stub server)
    pub base_url: String,
}

impl MercadoPagoConfig {
    /// Production Mercado Pago API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.mercadopago.com";
}

impl std::fmt::Debug for MercadoPagoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MercadoPagoConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CHOPERIA_DATABASE_URL")?;
        let host = get_env_or_default("CHOPERIA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHOPERIA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CHOPERIA_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CHOPERIA_PORT".to_string(), e.to_string()))?;
        let allowed_origins = parse_origins(&get_env_or_default(
            "CHOPERIA_ALLOWED_ORIGINS",
            DEFAULT_ALLOWED_ORIGINS,
        ));

        let mercado_pago = MercadoPagoConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            allowed_origins,
            mercado_pago,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl MercadoPagoConfig {
    fn from_env() -> Self {
        Self {
            access_token: get_optional_env("MERCADO_PAGO_ACCESS_TOKEN").map(SecretString::from),
            base_url: get_env_or_default("MERCADO_PAGO_BASE_URL", Self::DEFAULT_BASE_URL),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (injected by
/// managed `PostgreSQL` offerings).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
