//! Spending by category for one month
//!
//! Feeds the category chart and its legend: totals in descending order, each
//! with its share of the month's spending and its display style.

use serde::Serialize;

use crate::models::{category_style, BudgetMonth, BudgetState, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub category: String,
    pub total: Money,
    /// Share of the month's spending, in percent
    pub percentage: f64,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub month: String,
    pub total: Money,
    pub entries: Vec<BreakdownEntry>,
}

impl CategoryBreakdown {
    pub fn generate(state: &BudgetState, month: BudgetMonth) -> Self {
        let total = state.total_spent_in(month);

        let entries = state
            .category_totals_in(month)
            .into_iter()
            .map(|t| {
                let percentage = if total.is_positive() {
                    t.total.as_major() / total.as_major() * 100.0
                } else {
                    0.0
                };
                let style = category_style(&t.category);
                BreakdownEntry {
                    category: t.category,
                    total: t.total,
                    percentage,
                    icon: style.icon,
                    color: style.color,
                }
            })
            .collect();

        Self {
            month: month.display_name(),
            total,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::FALLBACK_STYLE;
    use crate::models::Expense;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_shares_and_styles() {
        let date = Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        let state = BudgetState {
            expenses: vec![
                Expense::with_date(Money::from_cents(2500), "Food", "", date),
                Expense::with_date(Money::from_cents(7500), "Pets", "", date),
            ],
            ..BudgetState::default()
        };

        let breakdown = CategoryBreakdown::generate(&state, BudgetMonth::new(2025, 2).unwrap());

        assert_eq!(breakdown.total, Money::from_cents(10000));
        assert_eq!(breakdown.entries[0].category, "Pets");
        assert!((breakdown.entries[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(breakdown.entries[0].color, FALLBACK_STYLE.color);
        assert_eq!(breakdown.entries[1].icon, "🍽️");
    }

    #[test]
    fn test_empty_month() {
        let breakdown =
            CategoryBreakdown::generate(&BudgetState::default(), BudgetMonth::new(2025, 2).unwrap());
        assert!(breakdown.is_empty());
        assert!(breakdown.total.is_zero());
    }
}
