//! Budget overview for one month

use serde::Serialize;

use crate::models::{BudgetHealth, BudgetMonth, BudgetState, Money, WarningLevel};

/// Spend versus budget at a glance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub month: String,
    pub budget: Money,
    pub spent: Money,
    /// Negative once the budget is exceeded
    pub remaining: Money,
    pub used_percentage: f64,
    /// Progress bar fill, capped at 100
    pub progress: f64,
    pub warning_level: WarningLevel,
    pub health: BudgetHealth,
    pub expense_count: usize,
}

impl BudgetOverview {
    /// Build the overview for `month`
    pub fn generate(state: &BudgetState, month: BudgetMonth) -> Self {
        let used_percentage = state.used_percentage_in(month);

        Self {
            month: month.display_name(),
            budget: state.monthly_budget,
            spent: state.total_spent_in(month),
            remaining: state.remaining_in(month),
            used_percentage,
            progress: used_percentage.min(100.0),
            warning_level: state.warning_level_in(month),
            health: BudgetHealth::from_percentage(used_percentage),
            expense_count: state.expenses_in(month).len(),
        }
    }

    /// Whether a budget has been set at all
    pub fn has_budget(&self) -> bool {
        self.budget.is_positive()
    }
}
