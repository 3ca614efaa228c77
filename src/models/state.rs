//! The persisted root object and its month-scoped aggregates
//!
//! `BudgetState` is stored whole under a single storage key. Partial data
//! (from an older version or from an import file) is applied through a
//! [`StatePatch`], which replaces top-level fields one by one and never
//! merges inside a field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::category::default_categories;
use super::currency::Currency;
use super::expense::Expense;
use super::money::Money;
use super::month::BudgetMonth;
use super::warning::WarningLevel;
use crate::error::{BudgetError, BudgetResult};

const FIELD_BUDGET: &str = "monthlyBudget";
const FIELD_EXPENSES: &str = "expenses";
const FIELD_CATEGORIES: &str = "categories";
const FIELD_CURRENCY: &str = "selectedCurrency";

/// Everything the tracker persists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetState {
    pub monthly_budget: Money,
    /// Newest first, by insertion
    pub expenses: Vec<Expense>,
    pub categories: Vec<String>,
    pub selected_currency: Currency,
}

impl Default for BudgetState {
    fn default() -> Self {
        Self {
            monthly_budget: Money::zero(),
            expenses: Vec::new(),
            categories: default_categories(),
            selected_currency: Currency::default(),
        }
    }
}

/// Spending total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

impl BudgetState {
    /// Expenses dated in `month`, in stored order
    pub fn expenses_in(&self, month: BudgetMonth) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| month.contains(&e.date))
            .collect()
    }

    pub fn total_spent_in(&self, month: BudgetMonth) -> Money {
        self.expenses_in(month).into_iter().map(|e| e.amount).sum()
    }

    /// Budget minus spending; negative once the budget is exceeded
    pub fn remaining_in(&self, month: BudgetMonth) -> Money {
        self.monthly_budget - self.total_spent_in(month)
    }

    /// Share of the budget spent, in percent; zero when no budget is set
    pub fn used_percentage_in(&self, month: BudgetMonth) -> f64 {
        if self.monthly_budget.is_zero() {
            return 0.0;
        }
        self.total_spent_in(month).as_major() / self.monthly_budget.as_major() * 100.0
    }

    /// Per-category totals, largest first; equal totals keep the order in
    /// which their category was first seen
    pub fn category_totals_in(&self, month: BudgetMonth) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for expense in self.expenses_in(month) {
            match totals.iter_mut().find(|t| t.category == expense.category) {
                Some(entry) => entry.total += expense.amount,
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                }),
            }
        }

        // sort_by is stable
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals
    }

    pub fn warning_level_in(&self, month: BudgetMonth) -> WarningLevel {
        WarningLevel::evaluate(self.remaining_in(month), self.used_percentage_in(month))
    }
}

/// A set of top-level fields to overwrite on a [`BudgetState`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePatch {
    pub monthly_budget: Option<Money>,
    pub expenses: Option<Vec<Expense>>,
    pub categories: Option<Vec<String>>,
    pub selected_currency: Option<Currency>,
}

impl StatePatch {
    /// Parse import data, rejecting anything that is not a well-formed
    /// budget object
    ///
    /// Unknown fields are ignored. Any known field that is present must be
    /// valid, or the whole patch is rejected with `InvalidFormat`.
    pub fn parse_strict(raw: &str) -> BudgetResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| BudgetError::InvalidFormat(format!("not valid JSON: {}", e)))?;
        let object = value
            .as_object()
            .ok_or_else(|| BudgetError::InvalidFormat("expected a JSON object".into()))?;

        let patch = Self {
            monthly_budget: strict_field(object, FIELD_BUDGET)?,
            expenses: strict_field(object, FIELD_EXPENSES)?,
            categories: strict_field(object, FIELD_CATEGORIES)?,
            selected_currency: strict_field(object, FIELD_CURRENCY)?,
        };
        patch.validate()?;
        Ok(patch)
    }

    /// Salvage what can be read from stored data
    ///
    /// Malformed fields are skipped (the default stays in place) and
    /// malformed expense records are dropped individually.
    pub fn from_stored(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Stored budget data is not valid JSON, using defaults: {}", e);
                return Self::default();
            }
        };
        let Some(object) = value.as_object() else {
            warn!("Stored budget data is not an object, using defaults");
            return Self::default();
        };

        let monthly_budget = lenient_field::<Money>(object, FIELD_BUDGET).filter(|budget| {
            let valid = !budget.is_negative();
            if !valid {
                warn!("Ignoring negative stored budget {}", budget);
            }
            valid
        });

        Self {
            monthly_budget,
            expenses: lenient_expenses(object),
            categories: lenient_field(object, FIELD_CATEGORIES),
            selected_currency: lenient_field(object, FIELD_CURRENCY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_budget.is_none()
            && self.expenses.is_none()
            && self.categories.is_none()
            && self.selected_currency.is_none()
    }

    /// Names of the fields this patch replaces, in wire spelling
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.monthly_budget.is_some() {
            names.push(FIELD_BUDGET);
        }
        if self.expenses.is_some() {
            names.push(FIELD_EXPENSES);
        }
        if self.categories.is_some() {
            names.push(FIELD_CATEGORIES);
        }
        if self.selected_currency.is_some() {
            names.push(FIELD_CURRENCY);
        }
        names
    }

    /// Overwrite the present fields of `state`
    pub fn apply(self, state: &mut BudgetState) {
        if let Some(budget) = self.monthly_budget {
            state.monthly_budget = budget;
        }
        if let Some(expenses) = self.expenses {
            state.expenses = expenses;
        }
        if let Some(categories) = self.categories {
            state.categories = categories;
        }
        if let Some(currency) = self.selected_currency {
            state.selected_currency = currency;
        }
    }

    fn validate(&self) -> BudgetResult<()> {
        if let Some(budget) = self.monthly_budget {
            if budget.is_negative() {
                return Err(BudgetError::InvalidFormat(format!(
                    "{} cannot be negative",
                    FIELD_BUDGET
                )));
            }
        }
        if let Some(expenses) = &self.expenses {
            if let Some(bad) = expenses.iter().find(|e| !e.amount.is_positive()) {
                return Err(BudgetError::InvalidFormat(format!(
                    "expense {} has an amount below {} (amounts are kept in whole cents)",
                    bad.id,
                    Money::MIN_POSITIVE
                )));
            }
        }
        if let Some(categories) = &self.categories {
            if categories.iter().any(|c| c.trim().is_empty()) {
                return Err(BudgetError::InvalidFormat(
                    "category names cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}

fn strict_field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> BudgetResult<Option<T>> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| BudgetError::InvalidFormat(format!("field '{}': {}", key, e))),
    }
}

fn lenient_field<T: DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    let value = object.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring malformed stored field '{}': {}", key, e);
            None
        }
    }
}

fn lenient_expenses(object: &Map<String, Value>) -> Option<Vec<Expense>> {
    let value = object.get(FIELD_EXPENSES)?;
    let Some(records) = value.as_array() else {
        warn!("Ignoring stored '{}': not an array", FIELD_EXPENSES);
        return None;
    };

    let mut expenses = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        match serde_json::from_value::<Expense>(record.clone()) {
            Ok(expense) if expense.amount.is_positive() => expenses.push(expense),
            Ok(expense) => warn!("Dropping stored expense {} with an amount below one cent", expense.id),
            Err(e) => warn!("Dropping malformed stored expense at index {}: {}", index, e),
        }
    }
    Some(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn month() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    fn expense(cents: i64, category: &str, day: u32) -> Expense {
        let date = Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap();
        Expense::with_date(Money::from_cents(cents), category, "", date)
    }

    fn state_with(budget: i64, expenses: Vec<Expense>) -> BudgetState {
        BudgetState {
            monthly_budget: Money::from_cents(budget),
            expenses,
            ..BudgetState::default()
        }
    }

    #[test]
    fn test_default_state() {
        let state = BudgetState::default();
        assert!(state.monthly_budget.is_zero());
        assert!(state.expenses.is_empty());
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.selected_currency, Currency::Usd);
    }

    #[test]
    fn test_totals_ignore_other_months() {
        let old = Expense::with_date(
            Money::from_cents(9900),
            "Food",
            "",
            Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        );
        let state = state_with(10000, vec![expense(4550, "Food", 2), old]);

        assert_eq!(state.expenses_in(month()).len(), 1);
        assert_eq!(state.total_spent_in(month()), Money::from_cents(4550));
        assert_eq!(state.remaining_in(month()), Money::from_cents(5450));
    }

    #[test]
    fn test_percentage_guarded_when_no_budget() {
        let state = state_with(0, vec![expense(1000, "Food", 1)]);
        assert_eq!(state.used_percentage_in(month()), 0.0);
    }

    #[test]
    fn test_category_totals_sorted_and_stable() {
        let state = state_with(
            0,
            vec![
                expense(500, "Shopping", 5),
                expense(1000, "Food", 4),
                expense(500, "Housing", 3),
                expense(200, "Shopping", 2),
            ],
        );

        let totals = state.category_totals_in(month());
        let names: Vec<_> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Shopping", "Housing"]);
        assert_eq!(totals[1].total, Money::from_cents(700));

        let tied = state_with(0, vec![expense(500, "Housing", 3), expense(500, "Food", 2)]);
        let names: Vec<_> = tied
            .category_totals_in(month())
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(names, vec!["Housing", "Food"]);
    }

    #[test]
    fn test_wire_layout() {
        let state = state_with(10000, vec![]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["monthlyBudget"], 100.0);
        assert_eq!(json["selectedCurrency"], "USD");
        assert!(json["expenses"].as_array().unwrap().is_empty());
        assert_eq!(json["categories"][0], "Food");
    }

    #[test]
    fn test_strict_patch_partial() {
        let patch = StatePatch::parse_strict(r#"{"monthlyBudget": 250, "extra": true}"#).unwrap();
        assert_eq!(patch.monthly_budget, Some(Money::from_cents(25000)));
        assert_eq!(patch.field_names(), vec!["monthlyBudget"]);

        let mut state = state_with(100, vec![expense(100, "Food", 1)]);
        patch.apply(&mut state);
        assert_eq!(state.monthly_budget, Money::from_cents(25000));
        assert_eq!(state.expenses.len(), 1);
    }

    #[test]
    fn test_strict_patch_rejections() {
        for raw in [
            "not json",
            "[1, 2]",
            r#"{"monthlyBudget": "lots"}"#,
            r#"{"monthlyBudget": -5}"#,
            r#"{"selectedCurrency": "GBP"}"#,
            r#"{"expenses": [{"id": 1, "amount": 0, "category": "Food", "date": "2025-01-01T00:00:00Z"}]}"#,
            r#"{"categories": ["Food", ""]}"#,
            r#"{"expenses": null}"#,
        ] {
            let err = StatePatch::parse_strict(raw).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidFormat(_)), "accepted {}", raw);
        }
    }

    #[test]
    fn test_strict_patch_sub_cent_amount_names_minimum() {
        let raw = r#"{"expenses": [{"id": 1, "amount": 0.001, "category": "Food", "date": "2025-01-01T00:00:00Z"}]}"#;
        let err = StatePatch::parse_strict(raw).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidFormat(_)));
        assert!(err.to_string().contains("below 0.01"));
    }

    #[test]
    fn test_strict_patch_rejects_oversized_amount() {
        let raw = r#"{"expenses": [{"id": 1, "amount": 9e16, "category": "Food", "date": "2025-01-01T00:00:00Z"}]}"#;
        assert!(matches!(
            StatePatch::parse_strict(raw),
            Err(BudgetError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_stored_patch_salvages_fields() {
        let raw = r#"{
            "monthlyBudget": "oops",
            "selectedCurrency": "EUR",
            "expenses": [
                {"id": 1, "amount": 10, "category": "Food", "description": "", "date": "2025-01-02T00:00:00.000Z"},
                {"id": 2, "amount": -3, "category": "Food", "description": "", "date": "2025-01-02T00:00:00.000Z"},
                {"id": 3, "category": "Food"}
            ]
        }"#;
        let patch = StatePatch::from_stored(raw);
        assert!(patch.monthly_budget.is_none());
        assert_eq!(patch.selected_currency, Some(Currency::Eur));
        assert_eq!(patch.expenses.as_ref().unwrap().len(), 1);
        assert!(patch.categories.is_none());
    }

    #[test]
    fn test_stored_patch_garbage_is_empty() {
        assert!(StatePatch::from_stored("{{{").is_empty());
        assert!(StatePatch::from_stored("42").is_empty());
        assert!(StatePatch::from_stored(r#"{"monthlyBudget": -1}"#).is_empty());
    }
}
