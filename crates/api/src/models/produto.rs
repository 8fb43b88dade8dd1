//! Catalog product.

use serde::{Deserialize, Serialize};

use choperia_core::{Category, Price, ProdutoId};

/// A menu product.
///
/// The same shape is used for registration requests and responses; the
/// client supplies the `id` when registering.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// Client-supplied unique identifier.
    pub id: ProdutoId,
    /// Display name.
    pub name: String,
    /// Menu description.
    pub description: String,
    /// Current unit price.
    pub price: Price,
    /// Image reference (the frontend ships emoji strings).
    pub image: String,
    /// Menu section.
    pub category: Category,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_accepts_numeric_price() {
        let json = r#"{
            "id": "1",
            "name": "Chopp Pilsen 500ml",
            "description": "Cerveja leve e refrescante",
            "price": 12.90,
            "image": "🍺",
            "category": "beer"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.category, Category::Beer);
        // Decimal equality ignores scale, so 12.9 from the JSON float matches
        assert_eq!(product.price.amount(), rust_decimal::Decimal::new(1290, 2));
    }

    #[test]
    fn test_deserialize_rejects_negative_price() {
        let json = r#"{
            "id": "1",
            "name": "Chopp",
            "description": "x",
            "price": -1,
            "image": "🍺",
            "category": "beer"
        }"#;

        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let json = r#"{
            "id": "1",
            "name": "Vinho",
            "description": "x",
            "price": 30,
            "image": "🍷",
            "category": "wine"
        }"#;

        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let product = Product {
            id: ProdutoId::parse("4").unwrap(),
            name: "Porção de Batata Frita".to_string(),
            description: "Batatas crocantes com molhos especiais".to_string(),
            price: Price::from_cents(2200),
            image: "🍟".to_string(),
            category: Category::Food,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "4");
        assert_eq!(value["category"], "food");
        assert_eq!(value["price"], "22.00");
    }
}
