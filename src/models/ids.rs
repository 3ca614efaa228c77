//! Expense identifier
//!
//! New ids are random UUIDs. Stored data may also carry legacy numeric ids
//! (creation timestamps, sometimes with a fractional part); those are read
//! from JSON numbers and kept in their textual form so they still match on
//! delete.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Prefix used when showing short ids to the user
pub const EXPENSE_ID_PREFIX: &str = "exp-";

/// Unique identifier of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for listings: `exp-` plus the first 8 characters of a
    /// UUID, or the raw value for legacy ids
    pub fn short(&self) -> String {
        if Uuid::parse_str(&self.0).is_ok() {
            format!("{}{}", EXPENSE_ID_PREFIX, &self.0[..8])
        } else {
            self.0.clone()
        }
    }

    /// Whether user input refers to this id, either exactly or as a prefix
    /// (with or without the `exp-` display prefix)
    pub fn matches_prefix(&self, input: &str) -> bool {
        let input = input.trim();
        let input = input.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(input);
        !input.is_empty() && self.0.starts_with(input)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ExpenseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct ExpenseIdVisitor;

impl<'de> Visitor<'de> for ExpenseIdVisitor {
    type Value = ExpenseId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or numeric expense id")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.is_empty() {
            return Err(E::custom("expense id cannot be empty"));
        }
        Ok(ExpenseId(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ExpenseId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ExpenseId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("expense id must be finite"));
        }
        Ok(ExpenseId(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpenseIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::from_raw("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "exp-550e8400");

        let legacy = ExpenseId::from_raw("1700000000000");
        assert_eq!(legacy.short(), "1700000000000");
    }

    #[test]
    fn test_prefix_matching() {
        let id = ExpenseId::from_raw("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.matches_prefix("exp-550e8400"));
        assert!(id.matches_prefix("550e"));
        assert!(id.matches_prefix("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!id.matches_prefix("exp-"));
        assert!(!id.matches_prefix("660e"));
    }

    #[test]
    fn test_deserialize_legacy_numbers() {
        let id: ExpenseId = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(id.as_str(), "1700000000000");

        let id: ExpenseId = serde_json::from_str("1700000000000.25").unwrap();
        assert_eq!(id.as_str(), "1700000000000.25");

        let id: ExpenseId = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(id.as_str(), "abc");

        assert!(serde_json::from_str::<ExpenseId>("null").is_err());
        assert!(serde_json::from_str::<ExpenseId>(r#""""#).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let id = ExpenseId::from_raw("1700000000000");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""1700000000000""#);
    }
}
