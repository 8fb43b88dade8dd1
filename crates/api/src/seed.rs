//! Initial catalog seeding.
//!
//! The storefront ships with a fixed menu of six produtos. Seeding is
//! idempotent: only produtos missing from the database are inserted, so
//! the endpoint and the CLI command can both be re-run safely.

use choperia_core::{Category, Price, ProdutoIdError};
use sqlx::PgPool;
use thiserror::Error;

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;

/// Errors that can occur while seeding the catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A seed entry carries an invalid produto id.
    #[error("invalid seed produto id: {0}")]
    InvalidProduto(#[from] ProdutoIdError),

    /// Database error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Number of produtos inserted by this run.
    pub inserted: usize,
}

impl SeedOutcome {
    /// Client-facing summary of the run.
    #[must_use]
    pub fn message(&self) -> String {
        if self.inserted > 0 {
            format!("{} produtos iniciais adicionados com sucesso.", self.inserted)
        } else {
            "Todos os produtos iniciais já estavam cadastrados.".to_string()
        }
    }
}

struct SeedProduto {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: u32,
    image: &'static str,
    category: Category,
}

impl SeedProduto {
    fn to_product(&self) -> Result<Product, ProdutoIdError> {
        Ok(Product {
            id: self.id.parse()?,
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Price::from_cents(self.price_cents),
            image: self.image.to_string(),
            category: self.category,
        })
    }
}

/// The menu the storefront launched with.
const INITIAL_PRODUTOS: &[SeedProduto] = &[
    SeedProduto {
        id: "1",
        name: "Chopp Pilsen 500ml",
        description: "Cerveja leve e refrescante, perfeita para qualquer momento",
        price_cents: 12_90,
        image: "🍺",
        category: Category::Beer,
    },
    SeedProduto {
        id: "2",
        name: "IPA Artesanal 500ml",
        description: "Amargor equilibrado com notas cítricas",
        price_cents: 18_50,
        image: "🍻",
        category: Category::Beer,
    },
    SeedProduto {
        id: "3",
        name: "Chopp Escuro 500ml",
        description: "Sabor intenso e marcante",
        price_cents: 14_90,
        image: "🍺",
        category: Category::Beer,
    },
    SeedProduto {
        id: "4",
        name: "Porção de Batata Frita",
        description: "Batatas crocantes com molhos especiais",
        price_cents: 22_00,
        image: "🍟",
        category: Category::Food,
    },
    SeedProduto {
        id: "5",
        name: "Tábua de Frios",
        description: "Seleção de queijos e embutidos",
        price_cents: 45_00,
        image: "🧀",
        category: Category::Food,
    },
    SeedProduto {
        id: "6",
        name: "Porção de Asas",
        description: "Asas de frango crocantes ao molho barbecue",
        price_cents: 32_00,
        image: "🍗",
        category: Category::Food,
    },
];

/// Insert every initial produto that is not already registered.
///
/// # Errors
///
/// Returns an error if a lookup or insert fails.
pub async fn seed_missing(pool: &PgPool) -> Result<SeedOutcome, SeedError> {
    let repository = ProductRepository::new(pool);
    let mut inserted = 0;

    for entry in INITIAL_PRODUTOS {
        let produto = entry.to_product()?;

        if repository.get(&produto.id).await?.is_some() {
            continue;
        }

        match repository.create(&produto).await {
            Ok(_) => inserted += 1,
            // Lost a race against a concurrent seeding run: the produto
            // exists now, which is all this function promises.
            Err(RepositoryError::Conflict(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(inserted, "catalog seeding finished");

    Ok(SeedOutcome { inserted })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_produtos_are_valid() {
        for entry in INITIAL_PRODUTOS {
            let produto = entry.to_product().unwrap();
            assert!(!produto.name.is_empty());
            assert!(!produto.description.is_empty());
        }
    }

    #[test]
    fn test_initial_produto_ids_are_unique() {
        let mut ids: Vec<&str> = INITIAL_PRODUTOS.iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), INITIAL_PRODUTOS.len());
    }

    #[test]
    fn test_message_counts_inserted() {
        let outcome = SeedOutcome { inserted: 6 };
        assert_eq!(
            outcome.message(),
            "6 produtos iniciais adicionados com sucesso."
        );
    }

    #[test]
    fn test_message_when_nothing_inserted() {
        let outcome = SeedOutcome { inserted: 0 };
        assert_eq!(
            outcome.message(),
            "Todos os produtos iniciais já estavam cadastrados."
        );
    }
}
