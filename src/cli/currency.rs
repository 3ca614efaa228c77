//! Currency CLI commands

use clap::Subcommand;

use super::warn_if_not_saved;
use crate::display::format_currency_list;
use crate::error::BudgetResult;
use crate::services::BudgetStore;
use crate::storage::StateStorage;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// List supported currencies
    List,

    /// Change the display currency (USD, EUR, PLN, MAD)
    Set {
        /// Currency code
        code: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command<S: StateStorage>(
    store: &mut BudgetStore<S>,
    cmd: CurrencyCommands,
) -> BudgetResult<()> {
    match cmd {
        CurrencyCommands::List => {
            print!("{}", format_currency_list(store.currency()));
        }

        CurrencyCommands::Set { code } => {
            let result = store.change_currency(&code)?;
            warn_if_not_saved(&result);
            println!("Currency changed to {}", result.value.name());
        }
    }

    Ok(())
}
