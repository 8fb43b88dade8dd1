//! Product category.

use serde::{Deserialize, Serialize};

/// The two sections of the choperia menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "product_category", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Chopps and bottled beers.
    Beer,
    /// Kitchen portions served alongside.
    Food,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beer => write!(f, "beer"),
            Self::Food => write!(f, "food"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beer" => Ok(Self::Beer),
            "food" => Ok(Self::Food),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
