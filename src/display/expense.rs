//! Expense display formatting

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category_style, CurrencyFormatter, Expense};

const FALLBACK_DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a timestamp in local time; an invalid `format` falls back to the
/// default format instead of failing
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
    let format = if valid { format } else { FALLBACK_DATE_FORMAT };
    date.with_timezone(&Local).format(format).to_string()
}

/// Category label with its icon
pub fn category_label(category: &str) -> String {
    format!("{} {}", category_style(category).icon, category)
}

/// Format expenses as a table
pub fn format_expense_table(
    expenses: &[&Expense],
    formatter: &CurrencyFormatter,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet\nAdd your first expense to get started: budget expense add <amount> <category>\n"
            .to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short(),
        date: format_date(&e.date, date_format),
        category: category_label(&e.category),
        description: e.description.clone(),
        amount: formatter.format(e.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single expense for display
pub fn format_expense_details(
    expense: &Expense,
    formatter: &CurrencyFormatter,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(&expense.date, date_format)));
    output.push_str(&format!("Category:    {}\n", category_label(&expense.category)));
    output.push_str(&format!("Amount:      {}\n", formatter.format(expense.amount)));

    if expense.has_description() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}
