//! Budget Tracker - personal monthly budget tracking
//!
//! This library provides the core of a single-user budget tracker: a monthly
//! budget, a list of categorized expenses, and a display currency, kept in a
//! single JSON document and summarized per calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, currencies, months, state)
//! - `storage`: Key/value state storage (JSON files, in-memory)
//! - `services`: The budget store and its mutations
//! - `reports`: Month overview and category breakdown
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::services::BudgetStore;
//! use budget_tracker::storage::MemoryStorage;
//! use budget_tracker::models::Money;
//!
//! let mut store = BudgetStore::load(MemoryStorage::new());
//! store.set_budget(Money::from_cents(100_000))?;
//! store.add_expense(Money::from_cents(4550), "Food", "Groceries")?;
//! println!("{}", store.remaining_budget());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
