//! Export, import and reset commands

use std::path::{Path, PathBuf};

use super::warn_if_not_saved;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, read_import_file, write_snapshot};
use crate::services::BudgetStore;
use crate::storage::StateStorage;

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// File or directory to write to (defaults to the current directory)
    pub output: Option<PathBuf>,
    /// Write expenses as CSV instead of the full JSON snapshot
    pub csv: bool,
    /// With CSV, include every month rather than just the current one
    pub all: bool,
}

/// Handle the export command
pub fn handle_export<S: StateStorage>(
    store: &BudgetStore<S>,
    options: ExportOptions,
) -> BudgetResult<()> {
    let output = options.output.unwrap_or_else(|| PathBuf::from("."));

    if options.csv {
        let expenses: Vec<_> = if options.all {
            store.state().expenses.iter().collect()
        } else {
            store.current_month_expenses()
        };

        let snapshot = store.export()?;
        let path = if output.is_dir() {
            output.join(snapshot.file_name.replace(".json", ".csv"))
        } else {
            output
        };

        let file = std::fs::File::create(&path)
            .map_err(|e| BudgetError::Export(format!("{}: {}", path.display(), e)))?;
        let count = export_expenses_csv(expenses, file)?;
        println!("Exported {} expenses to {}", count, path.display());
        return Ok(());
    }

    let snapshot = store.export()?;
    let path = write_snapshot(&snapshot, &output)?;
    println!("Data exported successfully to {}", path.display());
    Ok(())
}

/// Handle the import command
pub fn handle_import<S: StateStorage>(store: &mut BudgetStore<S>, file: &Path) -> BudgetResult<()> {
    let raw = read_import_file(file)?;
    let result = store.import(&raw)?;
    warn_if_not_saved(&result);

    let summary = result.value;
    if summary.fields.is_empty() {
        println!("Nothing to import: no budget fields found in {}", file.display());
    } else {
        println!("Data imported successfully ({})", summary.fields.join(", "));
        println!("{} expenses on record", summary.expense_count);
    }
    Ok(())
}

/// Handle the reset command
pub fn handle_reset<S: StateStorage>(store: &mut BudgetStore<S>, yes: bool) -> BudgetResult<()> {
    println!("This will delete the budget, all expenses and the currency choice.");
    if !yes {
        println!("To proceed, run again with --yes:");
        println!("  budget reset --yes");
        return Ok(());
    }

    store.reset()?;
    println!("All budget data removed");
    Ok(())
}
