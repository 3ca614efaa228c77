//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the budgeting
//! domain: the persisted state, expenses, money, currencies and categories.

pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;
pub mod state;
pub mod warning;

pub use category::{category_style, CategoryStyle, DEFAULT_CATEGORIES};
pub use currency::{Currency, CurrencyFormatter};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use month::BudgetMonth;
pub use state::{BudgetState, CategoryTotal, StatePatch};
pub use warning::{BudgetHealth, WarningLevel};
