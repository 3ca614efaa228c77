//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget store.

pub mod budget;
pub mod currency;
pub mod data;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use data::{handle_export, handle_import, handle_reset, ExportOptions};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_breakdown, handle_categories, handle_summary};

use crate::services::Persisted;

/// Tell the user when a change could not be saved
pub(crate) fn warn_if_not_saved<T>(result: &Persisted<T>) {
    if let Some(warning) = &result.warning {
        eprintln!("Warning: {} (the change applies to this session only)", warning);
    }
}
