//! Newtype IDs for type-safe entity references.
//!
//! Product IDs are client-supplied strings (the storefront ships a fixed
//! catalog keyed by short string codes), while order IDs are assigned by the
//! database sequence. Both get their own wrapper so they cannot be mixed up.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProdutoId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProdutoIdError {
    /// The input string is empty.
    #[error("produto id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("produto id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A product identifier.
///
/// Product IDs are chosen by the client when the product is registered and
/// are stored verbatim. They appear in URLs and in order line snapshots, so
/// the only structural constraints are non-emptiness and a length cap.
///
/// ## Examples
///
/// ```
/// use choperia_core::ProdutoId;
///
/// assert!(ProdutoId::parse("1").is_ok());
/// assert!(ProdutoId::parse("chopp-pilsen-500").is_ok());
///
/// assert!(ProdutoId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProdutoId(String);

impl ProdutoId {
    /// Maximum length of a product ID.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ProdutoId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or longer than 64 characters.
    pub fn parse(s: &str) -> Result<Self, ProdutoIdError> {
        if s.is_empty() {
            return Err(ProdutoIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProdutoIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the product ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProdutoId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProdutoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProdutoId {
    type Err = ProdutoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProdutoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Deserialization goes through `parse` so malformed IDs are rejected at the
// request boundary rather than reaching the database.
impl<'de> Deserialize<'de> for ProdutoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ProdutoId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProdutoId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ProdutoId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

/// An order (pedido) identifier, assigned by the database sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PedidoId(i32);

impl PedidoId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PedidoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PedidoId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<PedidoId> for i32 {
    fn from(id: PedidoId) -> Self {
        id.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for PedidoId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i32 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i32 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for PedidoId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let id = <i32 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(id))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for PedidoId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i32 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_produto_ids() {
        assert!(ProdutoId::parse("1").is_ok());
        assert!(ProdutoId::parse("42").is_ok());
        assert!(ProdutoId::parse("chopp-pilsen-500").is_ok());
        assert!(ProdutoId::parse("TABUA_FRIOS").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(ProdutoId::parse(""), Err(ProdutoIdError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(65);
        assert!(matches!(
            ProdutoId::parse(&long),
            Err(ProdutoIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_max_length_is_accepted() {
        let max = "a".repeat(ProdutoId::MAX_LENGTH);
        assert!(ProdutoId::parse(&max).is_ok());
    }

    #[test]
    fn test_display() {
        let id = ProdutoId::parse("3").unwrap();
        assert_eq!(format!("{id}"), "3");
    }

    #[test]
    fn test_from_str() {
        let id: ProdutoId = "6".parse().unwrap();
        assert_eq!(id.as_str(), "6");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProdutoId::parse("chopp-escuro").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"chopp-escuro\"");

        let parsed: ProdutoId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<ProdutoId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_pedido_id_roundtrip() {
        let id = PedidoId::new(7);
        assert_eq!(id.as_i32(), 7);
        assert_eq!(i32::from(id), 7);
        assert_eq!(PedidoId::from(7), id);
    }

    #[test]
    fn test_pedido_id_serde_is_transparent() {
        let id = PedidoId::new(12);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "12");

        let parsed: PedidoId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_pedido_id_display() {
        assert_eq!(format!("{}", PedidoId::new(99)), "99");
    }
}
