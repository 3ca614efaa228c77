//! Expense CLI commands

use clap::Subcommand;

use super::warn_if_not_saved;
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::BudgetResult;
use crate::models::Money;
use crate::services::{parse_amount, ActionOutcome, BudgetStore, ConfirmationRequest};
use crate::storage::StateStorage;

/// Sample expenses added by `expense demo`
const DEMO_EXPENSES: [(i64, &str, &str); 4] = [
    (4550, "Food", "Grocery shopping"),
    (1275, "Transportation", "Bus fare"),
    (2500, "Entertainment", "Movie tickets"),
    (1825, "Food", "Lunch"),
];

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name (see 'budget categories')
        category: String,
        /// Optional description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List this month's expenses, newest first
    List {
        /// Include expenses from every month
        #[arg(short, long)]
        all: bool,
        /// Number of expenses to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show expense details
    Show {
        /// Expense ID or unique prefix
        id: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID or unique prefix
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all of this month's expenses
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a few sample expenses to try things out
    Demo,
}

/// Handle an expense command
pub fn handle_expense_command<S: StateStorage>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let result = store.add_expense(amount, &category, &description)?;
            warn_if_not_saved(&result);

            let formatter = store.formatter(settings.locale_formatting);
            let added = result.value;
            println!(
                "Added {} expense for {} ({})",
                formatter.format(added.expense.amount),
                added.expense.category,
                added.expense.id.short()
            );
            if let Some(message) = added.warning_level.message() {
                println!("⚠ {}", message);
            }
        }

        ExpenseCommands::List { all, limit } => {
            let formatter = store.formatter(settings.locale_formatting);
            let limit = limit.unwrap_or(settings.recent_limit);

            let expenses: Vec<_> = if all {
                store.state().expenses.iter().collect()
            } else {
                store.current_month_expenses()
            };
            let shown: Vec<_> = expenses.iter().copied().take(limit).collect();

            print!("{}", format_expense_table(&shown, &formatter, &settings.date_format));
            if expenses.len() > shown.len() {
                println!("Showing {} of {} expenses", shown.len(), expenses.len());
            }
        }

        ExpenseCommands::Show { id } => {
            let formatter = store.formatter(settings.locale_formatting);
            let expense = store.find_expense(&id)?;
            print!(
                "{}",
                format_expense_details(expense, &formatter, &settings.date_format)
            );
        }

        ExpenseCommands::Delete { id, yes } => {
            let formatter = store.formatter(settings.locale_formatting);
            let id = store.find_expense(&id)?.id.clone();

            if let Some(request) = store.request_delete(&id, &formatter) {
                if !ask(&request, yes, &format!("budget expense delete {} --yes", id.short())) {
                    return Ok(());
                }
                let result = store.confirm(request.action);
                warn_if_not_saved(&result);
                if let ActionOutcome::Deleted(Some(_)) = result.value {
                    println!("Expense deleted");
                }
            }
        }

        ExpenseCommands::Clear { yes } => {
            let Some(request) = store.request_clear_current_month() else {
                println!("No expenses to clear");
                return Ok(());
            };
            if !ask(&request, yes, "budget expense clear --yes") {
                return Ok(());
            }

            let result = store.confirm(request.action);
            warn_if_not_saved(&result);
            if let ActionOutcome::Cleared(count) = result.value {
                println!("All expenses cleared ({} removed)", count);
            }
        }

        ExpenseCommands::Demo => {
            for (cents, category, description) in DEMO_EXPENSES {
                let result = store.add_expense(Money::from_cents(cents), category, description)?;
                warn_if_not_saved(&result);
            }
            println!("Added {} sample expenses", DEMO_EXPENSES.len());
        }
    }

    Ok(())
}

/// Print the confirmation prompt; returns whether to go ahead
fn ask(request: &ConfirmationRequest, confirmed: bool, rerun_hint: &str) -> bool {
    println!("{}", request.prompt);
    if !confirmed {
        println!("To proceed, run again with --yes:");
        println!("  {}", rerun_hint);
    }
    confirmed
}
