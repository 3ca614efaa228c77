//! Budget CLI commands

use clap::Subcommand;

use super::warn_if_not_saved;
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::{parse_amount, BudgetStore};
use crate::storage::StateStorage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount (e.g., "1500" or "1500.00")
        amount: String,
    },

    /// Show the monthly budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command<S: StateStorage>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let result = store.set_budget(amount)?;
            warn_if_not_saved(&result);

            let formatter = store.formatter(settings.locale_formatting);
            println!("Monthly budget set to {}", formatter.format(result.value));
        }

        BudgetCommands::Show => {
            let formatter = store.formatter(settings.locale_formatting);
            println!("Monthly budget: {}", formatter.format(store.state().monthly_budget));
            println!("Remaining:      {}", formatter.format(store.remaining_budget()));
        }
    }

    Ok(())
}
