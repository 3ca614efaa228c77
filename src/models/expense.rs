//! Expense model
//!
//! An expense is immutable once recorded; the only way to change one is to
//! delete it.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Always positive
    pub amount: Money,

    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Creation timestamp
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create an expense stamped with the current time
    pub fn new(amount: Money, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_date(amount, category, description, Utc::now())
    }

    /// Create an expense with an explicit timestamp (millisecond precision)
    pub fn with_date(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category: category.into(),
            description: description.into().trim().to_string(),
            date: date.trunc_subsecs(3),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2025-01-15T10:30:00.000Z`; any RFC 3339 offset is accepted on read
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_trims_description() {
        let expense = Expense::new(Money::from_cents(4550), "Food", "  Grocery shopping ");
        assert_eq!(expense.description, "Grocery shopping");
        assert!(expense.has_description());
        assert_eq!(expense.date, expense.date.trunc_subsecs(3));
    }

    #[test]
    fn test_wire_format() {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let mut expense = Expense::with_date(Money::from_cents(1275), "Transportation", "", date);
        expense.id = ExpenseId::from_raw("abc");

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["amount"], 12.75);
        assert_eq!(json["category"], "Transportation");
        assert_eq!(json["description"], "");
        assert_eq!(json["date"], "2025-01-15T10:30:00.000Z");
    }

    #[test]
    fn test_reads_legacy_record() {
        let json = r#"{
            "id": 1736937000000,
            "amount": 45.5,
            "category": "Food",
            "description": "Lunch",
            "date": "2025-01-15T10:30:00.000Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "1736937000000");
        assert_eq!(expense.amount, Money::from_cents(4550));
        assert_eq!(expense.date, Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_missing_description_defaults_empty() {
        let json = r#"{"id":"x","amount":1,"category":"Other","date":"2025-01-15T10:30:00Z"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(!expense.has_description());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let json = r#"{"id":"x","amount":1,"category":"Other","date":"yesterday"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }
}
