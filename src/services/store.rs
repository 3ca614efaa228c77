//! Budget store
//!
//! Owns the budget state and its storage backend. Every mutation validates
//! its input first (rejecting without touching the state), applies the change
//! in memory, then persists the whole state. A failed write does not undo the
//! change: it comes back as a warning on the successful result.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::category::resolve_category;
use crate::models::{
    BudgetMonth, BudgetState, CategoryTotal, Currency, CurrencyFormatter, Expense, ExpenseId,
    Money, StatePatch, WarningLevel,
};
use crate::storage::{StateStorage, STATE_KEY};

/// Result of a mutation together with the outcome of persisting it
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    /// Set when the state could not be written; the change is in memory only
    pub warning: Option<BudgetError>,
}

impl<T> Persisted<T> {
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Persisted<U> {
        Persisted {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// A newly recorded expense and the budget warning it leaves behind
#[derive(Debug, Clone)]
pub struct ExpenseAdded {
    pub expense: Expense,
    pub warning_level: WarningLevel,
}

/// What an import replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub fields: Vec<&'static str>,
    pub expense_count: usize,
}

/// Serialized state ready to be written to an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSnapshot {
    pub file_name: String,
    pub contents: String,
}

/// Parse a user-entered amount; anything that is not a plain finite number
/// is an `InvalidAmount`
pub fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|_| BudgetError::InvalidAmount(input.trim().to_string()))
}

/// Amounts are kept in whole cents, so the smallest accepted value is 0.01
fn check_positive(amount: Money) -> BudgetResult<()> {
    if amount < Money::MIN_POSITIVE {
        return Err(BudgetError::InvalidAmount(format!(
            "{} (amounts must be at least {})",
            amount,
            Money::MIN_POSITIVE
        )));
    }
    Ok(())
}

pub struct BudgetStore<S: StateStorage> {
    storage: S,
    state: BudgetState,
}

impl<S: StateStorage> BudgetStore<S> {
    /// Load the state from storage
    ///
    /// Missing or unreadable data yields the default state; stored fields
    /// that can be read replace their defaults one by one.
    pub fn load(storage: S) -> Self {
        let mut state = BudgetState::default();

        match storage.read(STATE_KEY) {
            Ok(Some(raw)) => StatePatch::from_stored(&raw).apply(&mut state),
            Ok(None) => debug!("No stored budget data, starting fresh"),
            Err(e) => warn!("Could not read stored budget data, using defaults: {}", e),
        }

        debug!(
            expenses = state.expenses.len(),
            currency = %state.selected_currency,
            "Loaded budget state"
        );
        Self { storage, state }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn currency(&self) -> Currency {
        self.state.selected_currency
    }

    /// Formatter for the selected currency
    pub fn formatter(&self, localized: bool) -> CurrencyFormatter {
        CurrencyFormatter::new(self.state.selected_currency, localized)
    }

    fn persist(&mut self) -> Option<BudgetError> {
        let result = serde_json::to_string(&self.state)
            .map_err(BudgetError::from)
            .and_then(|raw| self.storage.write(STATE_KEY, &raw));

        match result {
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to persist budget state: {}", e);
                Some(BudgetError::PersistenceFailure(e.to_string()))
            }
        }
    }

    fn persisted<T>(&mut self, value: T) -> Persisted<T> {
        let warning = self.persist();
        Persisted { value, warning }
    }

    // === Mutations ===

    /// Replace the monthly budget
    pub fn set_budget(&mut self, amount: Money) -> BudgetResult<Persisted<Money>> {
        check_positive(amount)?;

        self.state.monthly_budget = amount;
        info!("Monthly budget set to {}", amount);
        Ok(self.persisted(amount))
    }

    /// Record a new expense at the front of the list
    pub fn add_expense(
        &mut self,
        amount: Money,
        category: &str,
        description: &str,
    ) -> BudgetResult<Persisted<ExpenseAdded>> {
        check_positive(amount)?;
        if category.trim().is_empty() {
            return Err(BudgetError::MissingCategory);
        }
        let category = resolve_category(&self.state.categories, category)
            .ok_or_else(|| BudgetError::UnknownCategory(category.trim().to_string()))?
            .to_string();

        let expense = Expense::new(amount, category, description);
        self.state.expenses.insert(0, expense.clone());
        debug!(id = %expense.id, amount = %amount, category = %expense.category, "Added expense");

        let warning_level = self.budget_warning_level();
        Ok(self.persisted(ExpenseAdded {
            expense,
            warning_level,
        }))
    }

    /// Delete an expense by id; an unknown id is a no-op
    pub fn delete_expense(&mut self, id: &ExpenseId) -> Persisted<Option<Expense>> {
        let removed = self
            .state
            .expenses
            .iter()
            .position(|e| &e.id == id)
            .map(|index| self.state.expenses.remove(index));

        match &removed {
            Some(expense) => debug!(id = %expense.id, "Deleted expense"),
            None => debug!(id = %id, "Delete requested for unknown expense"),
        }
        self.persisted(removed)
    }

    /// Remove every expense dated in the current month
    ///
    /// Returns how many were removed; zero means there was nothing to clear.
    pub fn clear_current_month_expenses(&mut self) -> Persisted<usize> {
        self.clear_month_expenses(BudgetMonth::current())
    }

    /// Remove every expense dated in `month`
    pub fn clear_month_expenses(&mut self, month: BudgetMonth) -> Persisted<usize> {
        let before = self.state.expenses.len();
        self.state.expenses.retain(|e| !month.contains(&e.date));
        let removed = before - self.state.expenses.len();

        info!("Cleared {} expenses for {}", removed, month);
        self.persisted(removed)
    }

    /// Switch the display currency by code
    pub fn change_currency(&mut self, code: &str) -> BudgetResult<Persisted<Currency>> {
        let currency: Currency = code.parse()?;
        self.state.selected_currency = currency;
        info!("Currency changed to {}", currency.name());
        Ok(self.persisted(currency))
    }

    /// Merge imported JSON over the current state
    ///
    /// On `InvalidFormat` nothing changes.
    pub fn import(&mut self, raw: &str) -> BudgetResult<Persisted<ImportSummary>> {
        let patch = StatePatch::parse_strict(raw)?;
        let fields = patch.field_names();

        patch.apply(&mut self.state);
        let summary = ImportSummary {
            fields,
            expense_count: self.state.expenses.len(),
        };

        info!("Imported fields: {:?}", summary.fields);
        Ok(self.persisted(summary))
    }

    /// Serialize the current state for handing off as a file
    pub fn export(&self) -> BudgetResult<ExportSnapshot> {
        let contents = serde_json::to_string_pretty(&self.state)?;
        Ok(ExportSnapshot {
            file_name: format!("budget-data-{}.json", Utc::now().format("%Y-%m-%d")),
            contents,
        })
    }

    /// Drop the stored state and start over from defaults
    pub fn reset(&mut self) -> BudgetResult<()> {
        self.storage.remove(STATE_KEY)?;
        self.state = BudgetState::default();
        info!("Stored budget data removed");
        Ok(())
    }

    // === Lookups ===

    /// Find an expense by full id or unique prefix
    pub fn find_expense(&self, input: &str) -> BudgetResult<&Expense> {
        let input = input.trim();
        if let Some(exact) = self.state.expenses.iter().find(|e| e.id.as_str() == input) {
            return Ok(exact);
        }

        let mut matches = self.state.expenses.iter().filter(|e| e.id.matches_prefix(input));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (Some(_), Some(_)) => Err(BudgetError::AmbiguousId(input.to_string())),
            (None, _) => Err(BudgetError::expense_not_found(input)),
        }
    }

    // === Derived views ===

    pub fn current_month_expenses(&self) -> Vec<&Expense> {
        self.state.expenses_in(BudgetMonth::current())
    }

    pub fn total_spent(&self) -> Money {
        self.state.total_spent_in(BudgetMonth::current())
    }

    pub fn remaining_budget(&self) -> Money {
        self.state.remaining_in(BudgetMonth::current())
    }

    pub fn budget_used_percentage(&self) -> f64 {
        self.state.used_percentage_in(BudgetMonth::current())
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.state.category_totals_in(BudgetMonth::current())
    }

    pub fn budget_warning_level(&self) -> WarningLevel {
        self.state.warning_level_in(BudgetMonth::current())
    }
}
