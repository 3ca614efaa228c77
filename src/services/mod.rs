//! Business logic layer
//!
//! The budget store and the confirmation flow for destructive actions.

pub mod confirm;
pub mod store;

pub use confirm::{ActionOutcome, ConfirmationRequest, PendingAction};
pub use store::{parse_amount, BudgetStore, ExpenseAdded, ExportSnapshot, ImportSummary, Persisted};
