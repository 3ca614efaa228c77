//! Summary, breakdown and category listing

use crate::config::settings::Settings;
use crate::display::{format_breakdown, format_overview};
use crate::error::BudgetResult;
use crate::models::{category_style, BudgetMonth};
use crate::reports::{BudgetOverview, CategoryBreakdown};
use crate::services::BudgetStore;
use crate::storage::StateStorage;

/// Print the budget overview for the current month
pub fn handle_summary<S: StateStorage>(
    store: &BudgetStore<S>,
    settings: &Settings,
    json: bool,
) -> BudgetResult<()> {
    let overview = BudgetOverview::generate(store.state(), BudgetMonth::current());

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print!(
            "{}",
            format_overview(&overview, &store.formatter(settings.locale_formatting))
        );
    }
    Ok(())
}

/// Print spending by category for the current month
pub fn handle_breakdown<S: StateStorage>(
    store: &BudgetStore<S>,
    settings: &Settings,
    json: bool,
) -> BudgetResult<()> {
    let breakdown = CategoryBreakdown::generate(store.state(), BudgetMonth::current());

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!(
            "{}",
            format_breakdown(&breakdown, &store.formatter(settings.locale_formatting))
        );
    }
    Ok(())
}

/// Print the available categories
pub fn handle_categories<S: StateStorage>(store: &BudgetStore<S>) {
    println!("Categories:");
    for category in &store.state().categories {
        println!("  {} {}", category_style(category).icon, category);
    }
}
