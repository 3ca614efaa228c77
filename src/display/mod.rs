//! Display formatting for terminal output
//!
//! Turns expenses and reports into text. Nothing here reads or changes the
//! store; callers pass in the data to show.

pub mod expense;
pub mod report;

pub use expense::{format_date, format_expense_details, format_expense_table};
pub use report::{format_breakdown, format_currency_list, format_overview};
