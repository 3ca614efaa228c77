//! Confirmation of destructive actions
//!
//! Instead of holding a callback until the user answers, the store hands out
//! a [`ConfirmationRequest`] describing what would happen. The caller shows
//! the prompt and, if the user agrees, passes the [`PendingAction`] back to
//! [`BudgetStore::confirm`].

use super::store::{BudgetStore, Persisted};
use crate::models::{CurrencyFormatter, Expense, ExpenseId};
use crate::storage::StateStorage;

/// A destructive action awaiting the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteExpense(ExpenseId),
    ClearCurrentMonth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub action: PendingAction,
    pub prompt: String,
}

/// What a confirmed action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Deleted(Option<Expense>),
    Cleared(usize),
}

impl<S: StateStorage> BudgetStore<S> {
    /// Ask to delete an expense; `None` if no expense has this id
    pub fn request_delete(
        &self,
        id: &ExpenseId,
        formatter: &CurrencyFormatter,
    ) -> Option<ConfirmationRequest> {
        let expense = self.state().expenses.iter().find(|e| &e.id == id)?;
        Some(ConfirmationRequest {
            action: PendingAction::DeleteExpense(id.clone()),
            prompt: format!(
                "Are you sure you want to delete the {} expense of {}?",
                expense.category,
                formatter.format(expense.amount)
            ),
        })
    }

    /// Ask to clear this month's expenses; `None` when there are none
    pub fn request_clear_current_month(&self) -> Option<ConfirmationRequest> {
        let count = self.current_month_expenses().len();
        if count == 0 {
            return None;
        }
        Some(ConfirmationRequest {
            action: PendingAction::ClearCurrentMonth,
            prompt: format!(
                "Are you sure you want to delete all {} expenses for this month?",
                count
            ),
        })
    }

    /// Carry out a confirmed action
    pub fn confirm(&mut self, action: PendingAction) -> Persisted<ActionOutcome> {
        match action {
            PendingAction::DeleteExpense(id) => self.delete_expense(&id).map(ActionOutcome::Deleted),
            PendingAction::ClearCurrentMonth => self
                .clear_current_month_expenses()
                .map(ActionOutcome::Cleared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Money};
    use crate::storage::MemoryStorage;

    fn formatter() -> CurrencyFormatter {
        CurrencyFormatter::new(Currency::Usd, true)
    }

    #[test]
    fn test_delete_flow() {
        let mut store = BudgetStore::load(MemoryStorage::new());
        let id = store
            .add_expense(Money::from_cents(4550), "Food", "")
            .unwrap()
            .value
            .expense
            .id;

        let request = store.request_delete(&id, &formatter()).unwrap();
        assert_eq!(
            request.prompt,
            "Are you sure you want to delete the Food expense of $45.50?"
        );

        let outcome = store.confirm(request.action);
        assert!(matches!(outcome.value, ActionOutcome::Deleted(Some(_))));
        assert!(store.state().expenses.is_empty());
    }

    #[test]
    fn test_delete_unknown_has_no_request() {
        let store = BudgetStore::load(MemoryStorage::new());
        assert!(store.request_delete(&ExpenseId::new(), &formatter()).is_none());
    }

    #[test]
    fn test_clear_flow() {
        let mut store = BudgetStore::load(MemoryStorage::new());
        assert!(store.request_clear_current_month().is_none());

        let _ = store.add_expense(Money::from_cents(100), "Food", "").unwrap();
        let _ = store.add_expense(Money::from_cents(200), "Other", "").unwrap();

        let request = store.request_clear_current_month().unwrap();
        assert_eq!(
            request.prompt,
            "Are you sure you want to delete all 2 expenses for this month?"
        );
        assert_eq!(store.confirm(request.action).value, ActionOutcome::Cleared(2));
    }
}
