//! Report formatting for terminal output

use crate::models::{BudgetHealth, Currency, CurrencyFormatter};
use crate::reports::{BudgetOverview, CategoryBreakdown};

const WIDTH: usize = 48;
const BAR_WIDTH: usize = 24;

/// Format a percentage with one decimal, as shown on the overview
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the budget overview
pub fn format_overview(overview: &BudgetOverview, formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget Overview: {}\n", overview.month));
    output.push_str(&"═".repeat(WIDTH));
    output.push('\n');

    let marker = match overview.health {
        BudgetHealth::Healthy => "",
        BudgetHealth::Warning => " ⚠",
        BudgetHealth::Danger => " ✗",
    };

    output.push_str(&format!("Monthly budget:  {}\n", formatter.format(overview.budget)));
    output.push_str(&format!("Total spent:     {}\n", formatter.format(overview.spent)));
    output.push_str(&format!(
        "Remaining:       {}{}\n",
        formatter.format(overview.remaining),
        marker
    ));
    output.push_str(&format!(
        "Budget used:     {}{}\n",
        format_percentage(overview.used_percentage),
        marker
    ));
    output.push('\n');
    output.push_str(&format!(
        "[{}] {} used\n",
        format_bar(overview.progress, 100.0, BAR_WIDTH),
        format_percentage(overview.used_percentage)
    ));

    if !overview.has_budget() {
        output.push_str("\nNo monthly budget set. Run 'budget budget set <amount>' to set one.\n");
    }
    if let Some(message) = overview.warning_level.message() {
        output.push_str(&format!("\n⚠ {}\n", message));
    }

    output
}

/// Format the category breakdown as a legend with bars
pub fn format_breakdown(breakdown: &CategoryBreakdown, formatter: &CurrencyFormatter) -> String {
    if breakdown.is_empty() {
        return "No spending data available\nAdd some expenses to see category breakdown\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Spending by Category: {}\n", breakdown.month));
    output.push_str(&"═".repeat(WIDTH));
    output.push('\n');

    let name_width = breakdown
        .entries
        .iter()
        .map(|e| e.category.chars().count())
        .max()
        .unwrap_or(8);

    for entry in &breakdown.entries {
        output.push_str(&format!(
            "{} {:name_width$} {:>12}  {:>6}  {}\n",
            entry.icon,
            entry.category,
            formatter.format(entry.total),
            format_percentage(entry.percentage),
            format_bar(entry.percentage, 100.0, BAR_WIDTH / 2),
            name_width = name_width
        ));
    }

    output.push_str(&"─".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!("Total spent: {}\n", formatter.format(breakdown.total)));

    output
}

/// Format the list of supported currencies, marking the selected one
pub fn format_currency_list(selected: Currency) -> String {
    let mut output = String::new();
    for currency in Currency::ALL {
        let marker = if currency == selected { "*" } else { " " };
        output.push_str(&format!(
            "{} {} {:3} {}\n",
            marker,
            currency.code(),
            currency.symbol(),
            currency.name()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetMonth, BudgetState, Expense, Money};
    use chrono::{TimeZone, Utc};

    fn state(budget: i64, amounts: &[(i64, &str)]) -> BudgetState {
        let date = Utc.with_ymd_and_hms(2025, 3, 3, 3, 3, 3).unwrap();
        BudgetState {
            monthly_budget: Money::from_cents(budget),
            expenses: amounts
                .iter()
                .map(|(c, cat)| Expense::with_date(Money::from_cents(*c), *cat, "", date))
                .collect(),
            ..BudgetState::default()
        }
    }

    fn march() -> BudgetMonth {
        BudgetMonth::new(2025, 3).unwrap()
    }

    fn formatter() -> CurrencyFormatter {
        CurrencyFormatter::new(Currency::Usd, true)
    }

    #[test]
    fn test_bar() {
        assert_eq!(format_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
        assert_eq!(format_bar(150.0, 100.0, 2), "██");
    }

    #[test]
    fn test_overview_text() {
        let overview = BudgetOverview::generate(&state(10000, &[(4550, "Food"), (1275, "Transportation")]), march());
        let output = format_overview(&overview, &formatter());

        assert!(output.contains("Budget Overview: March 2025"));
        assert!(output.contains("Total spent:     $58.25"));
        assert!(output.contains("Remaining:       $41.75"));
        assert!(output.contains("58.2% used") || output.contains("58.3% used"));
        assert!(!output.contains("⚠"));
    }

    #[test]
    fn test_overview_exceeded() {
        let overview = BudgetOverview::generate(&state(5000, &[(6000, "Food")]), march());
        let output = format_overview(&overview, &formatter());

        assert!(output.contains("Remaining:       -$10.00 ✗"));
        assert!(output.contains("exceeded your monthly budget"));
    }

    #[test]
    fn test_breakdown_text() {
        let breakdown = CategoryBreakdown::generate(&state(0, &[(2500, "Food"), (7500, "Housing")]), march());
        let output = format_breakdown(&breakdown, &formatter());

        let housing = output.find("Housing").unwrap();
        let food = output.find("Food").unwrap();
        assert!(housing < food);
        assert!(output.contains("75.0%"));
        assert!(output.contains("Total spent: $100.00"));
    }

    #[test]
    fn test_empty_breakdown() {
        let breakdown = CategoryBreakdown::generate(&BudgetState::default(), march());
        assert!(format_breakdown(&breakdown, &formatter()).starts_with("No spending data"));
    }

    #[test]
    fn test_currency_list_marks_selection() {
        let output = format_currency_list(Currency::Eur);
        assert!(output.contains("* EUR"));
        assert!(output.contains("  USD"));
    }
}
