//! CSV export of expenses

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Expense;

/// Write expenses as CSV rows: ID, Date, Category, Description, Amount
pub fn export_expenses_csv<'a, W, I>(expenses: I, writer: W) -> BudgetResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Expense>,
{
    let export_err = |e: csv::Error| BudgetError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    let mut count = 0;
    for expense in expenses {
        let date = expense.date.format("%Y-%m-%d %H:%M:%S").to_string();
        let amount = expense.amount.to_string();
        csv_writer
            .write_record([
                expense.id.as_str(),
                date.as_str(),
                expense.category.as_str(),
                expense.description.as_str(),
                amount.as_str(),
            ])
            .map_err(export_err)?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_rows() {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let mut expense = Expense::with_date(Money::from_cents(4550), "Food", "Lunch, with tip", date);
        expense.id = ExpenseId::from_raw("abc");

        let mut output = Vec::new();
        let count = export_expenses_csv([&expense], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(count, 1);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Date,Category,Description,Amount"));
        assert_eq!(
            lines.next(),
            Some("abc,2025-01-15 10:30:00,Food,\"Lunch, with tip\",45.50")
        );
    }
}
