//! Produto catalog routes.
//!
//! The catalog is keyed by merchant-assigned string IDs, so registration
//! takes the full produto record including its `id`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{ApiError, Result};
use crate::models::Product;
use crate::routes::Pagination;
use crate::seed;
use crate::state::AppState;

/// List registered produtos.
///
/// GET /produtos/
///
/// # Errors
///
/// Returns `ApiError::Database` if the query fails.
pub async fn list_produtos(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Product>>> {
    let produtos = ProductRepository::new(state.pool())
        .list(pagination.skip(), pagination.limit())
        .await?;

    Ok(Json(produtos))
}

/// Register a new produto.
///
/// POST /produtos/
///
/// # Errors
///
/// Returns `ApiError::BadRequest` when the ID is already registered and
/// `ApiError::Database` if the insert fails.
pub async fn create_produto(
    State(state): State<AppState>,
    Json(produto): Json<Product>,
) -> Result<(StatusCode, Json<Product>)> {
    let created = ProductRepository::new(state.pool())
        .create(&produto)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                ApiError::BadRequest("Produto ID already registered".to_string())
            }
            other => ApiError::Database(other),
        })?;

    tracing::info!(produto_id = %created.id, "produto registered");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a single produto.
///
/// GET /produtos/{produto_id}
///
/// The path segment is taken as an opaque string: anything that cannot be
/// a produto ID is reported the same way as an unregistered one.
///
/// # Errors
///
/// Returns `ApiError::NotFound` when no produto has this ID and
/// `ApiError::Database` if the lookup fails.
pub async fn get_produto(
    State(state): State<AppState>,
    Path(produto_id): Path<String>,
) -> Result<Json<Product>> {
    let not_found = || ApiError::NotFound("Produto not found".to_string());

    let produto_id = produto_id.parse().map_err(|_| not_found())?;
    let produto = ProductRepository::new(state.pool())
        .get(&produto_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(produto))
}

/// Response body of the seeding endpoint.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: String,
}

/// Seed the initial menu.
///
/// POST /initialize_produtos/
///
/// Idempotent; only produtos missing from the catalog are inserted.
///
/// # Errors
///
/// Returns `ApiError::Seed` if seeding fails.
pub async fn initialize_produtos(State(state): State<AppState>) -> Result<Json<SeedResponse>> {
    let outcome = seed::seed_missing(state.pool()).await?;

    Ok(Json(SeedResponse {
        message: outcome.message(),
    }))
}
