//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Amount was missing, not a number, not finite, or not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// No category was given for an expense
    #[error("Please select a category")]
    MissingCategory,

    /// Category is not one of the configured categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency code is not one of the supported currencies
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Imported data could not be interpreted as budget data
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Writing the state to storage failed; the in-memory change still stands
    #[error("Error saving data: {0}")]
    PersistenceFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short id prefix matched more than one expense
    #[error("Ambiguous expense id '{0}': matches more than one expense")]
    AmbiguousId(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error rejected user input (state was left unchanged)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::MissingCategory
                | Self::UnknownCategory(_)
                | Self::UnknownCurrency(_)
                | Self::InvalidFormat(_)
        )
    }

    /// Check if this is a persistence failure
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistenceFailure(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
