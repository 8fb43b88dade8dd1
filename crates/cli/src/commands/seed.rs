//! Seed the produto catalog.
//!
//! Inserts the storefront's initial menu, skipping produtos that already
//! exist. Safe to run repeatedly; the HTTP endpoint
//! `POST /initialize_produtos/` does the same thing.

use secrecy::SecretString;
use tracing::info;

use choperia_api::{db, seed};

/// Seed the initial produtos.
///
/// # Errors
///
/// Returns an error if the database URL is missing or database operations
/// fail.
pub async fn initial_produtos() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CHOPERIA_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CHOPERIA_DATABASE_URL not set")?;

    // Connect to database
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let outcome = seed::seed_missing(&pool).await?;

    info!("Seeding complete!");
    info!("  {}", outcome.message());

    Ok(())
}
