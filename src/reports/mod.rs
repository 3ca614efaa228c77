//! Reports built from the budget state
//!
//! Reports are plain data: the display layer turns them into text.

pub mod breakdown;
pub mod overview;

pub use breakdown::{BreakdownEntry, CategoryBreakdown};
pub use overview::BudgetOverview;
