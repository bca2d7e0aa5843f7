//! Status and expense formatting
//!
//! Renders spend totals against limits for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetStatus, Category, Expense, Limits, Money, Period, SpendStatus};

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Percentage of the limit used, or "-" when there is no positive limit
pub fn format_usage(spent: Money, limit: Money) -> String {
    if limit.is_positive() {
        format!("{:.0}%", spent.ratio_of(limit) * 100.0)
    } else {
        "-".to_string()
    }
}

fn status_label(status: SpendStatus) -> String {
    match status {
        SpendStatus::Normal => "ok".to_string(),
        other => other.marker().trim_matches(|c| c == '(' || c == ')').to_string(),
    }
}

/// Format the one-line totals summary for a category
///
/// e.g. `Food: $130.00 / $150.00  (Warning)`
pub fn format_category_line(
    category: Category,
    spent: Money,
    limit: Money,
    status: SpendStatus,
    symbol: &str,
) -> String {
    let mut line = format!(
        "{}: {} / {}",
        category,
        spent.format_with_symbol(symbol),
        limit.format_with_symbol(symbol)
    );
    if status != SpendStatus::Normal {
        line.push_str("  ");
        line.push_str(status.marker());
    }
    line
}

/// Format the overall totals line
pub fn format_overall_line(status: &BudgetStatus, symbol: &str) -> String {
    let mut line = format!(
        "Overall: {} / {}",
        status.total_spent.format_with_symbol(symbol),
        status.total_limit.format_with_symbol(symbol)
    );
    if status.overall != SpendStatus::Normal {
        line.push_str("  ");
        line.push_str(status.overall.marker());
    }
    line
}

/// Format the full status report: a per-category table and the overall line
pub fn format_status_report(
    period: &Period,
    status: &BudgetStatus,
    limits: &Limits,
    symbol: &str,
) -> String {
    let rows: Vec<StatusRow> = Category::all()
        .iter()
        .map(|category| {
            let spent = status.spent(*category);
            let limit = limits.get(category).copied().unwrap_or_default();
            StatusRow {
                category: category.to_string(),
                spent: spent.format_with_symbol(symbol),
                limit: limit.format_with_symbol(symbol),
                used: format_usage(spent, limit),
                status: status_label(status.status(*category)),
            }
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string();

    let mut output = String::new();
    output.push_str(&format!("Budget period: {}\n\n", period));
    output.push_str(&table);
    output.push_str("\n\n");
    output.push_str(&format_overall_line(status, symbol));
    output.push('\n');
    output
}

/// Format the plain-text totals block (one line per category, then overall)
pub fn format_totals_text(status: &BudgetStatus, limits: &Limits, symbol: &str) -> String {
    let mut output = String::from("Totals:\n");

    for category in Category::all() {
        let limit = limits.get(category).copied().unwrap_or_default();
        output.push_str(&format_category_line(
            *category,
            status.spent(*category),
            limit,
            status.status(*category),
            symbol,
        ));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_overall_line(status, symbol));
    output.push('\n');
    output
}

/// Format the current limits
pub fn format_limits(limits: &Limits, symbol: &str) -> String {
    let total: Money = limits.values().sum();
    let mut output = String::from("Category limits:\n");
    for (category, limit) in limits {
        output.push_str(&format!(
            "  {:<16}{:>12}\n",
            category.name(),
            limit.format_with_symbol(symbol)
        ));
    }
    output.push_str(&format!(
        "  {:<16}{:>12}\n",
        "Total",
        total.format_with_symbol(symbol)
    ));
    output
}

/// Format the expenses of a period as a table
pub fn format_expense_list(period: &Period, expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("No expenses recorded for {}.\n", period);
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .enumerate()
        .map(|(i, e)| ExpenseRow {
            index: i + 1,
            category: e.category.to_string(),
            amount: e.amount.format_with_symbol(symbol),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string();

    format!("Expenses for {}:\n\n{}\n", period, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_limits;
    use std::collections::BTreeMap;

    fn status_with(food: f64, food_status: SpendStatus, overall: SpendStatus) -> BudgetStatus {
        let mut totals: BTreeMap<Category, Money> =
            Category::all().iter().map(|c| (*c, Money::zero())).collect();
        totals.insert(Category::Food, Money::new(food));
        let mut statuses: BTreeMap<Category, SpendStatus> = Category::all()
            .iter()
            .map(|c| (*c, SpendStatus::Normal))
            .collect();
        statuses.insert(Category::Food, food_status);

        BudgetStatus {
            totals,
            statuses,
            total_spent: Money::new(food),
            total_limit: Money::new(375.0),
            overall,
        }
    }

    #[test]
    fn test_category_line_markers() {
        let line = format_category_line(
            Category::Food,
            Money::new(130.0),
            Money::new(150.0),
            SpendStatus::Warning,
            "$",
        );
        assert_eq!(line, "Food: $130.00 / $150.00  (Warning)");

        let line = format_category_line(
            Category::Misc,
            Money::zero(),
            Money::new(50.0),
            SpendStatus::Normal,
            "$",
        );
        assert_eq!(line, "Misc: $0.00 / $50.00");
    }

    #[test]
    fn test_totals_text() {
        let status = status_with(150.0, SpendStatus::Exceeded, SpendStatus::Normal);
        let text = format_totals_text(&status, &default_limits(), "$");

        assert!(text.starts_with("Totals:\n"));
        assert!(text.contains("Food: $150.00 / $150.00  (Exceeded)"));
        assert!(text.contains("Transportation: $0.00 / $75.00\n"));
        assert!(text.contains("Overall: $150.00 / $375.00\n"));
    }

    #[test]
    fn test_status_report_table() {
        let status = status_with(130.0, SpendStatus::Warning, SpendStatus::Normal);
        let report = format_status_report(&Period::new("2026-02"), &status, &default_limits(), "$");

        assert!(report.contains("Budget period: 2026-02"));
        assert!(report.contains("Category"));
        assert!(report.contains("$130.00"));
        assert!(report.contains("87%"));
        assert!(report.contains("Warning"));
        assert!(report.contains("Overall: $130.00 / $375.00"));
    }

    #[test]
    fn test_usage() {
        assert_eq!(format_usage(Money::new(75.0), Money::new(150.0)), "50%");
        assert_eq!(format_usage(Money::new(75.0), Money::zero()), "-");
    }

    #[test]
    fn test_limits() {
        let text = format_limits(&default_limits(), "$");
        assert!(text.contains("Food"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("$375.00"));
    }

    #[test]
    fn test_expense_list() {
        let period = Period::new("2026-02");
        assert_eq!(
            format_expense_list(&period, &[], "$"),
            "No expenses recorded for 2026-02.\n"
        );

        let expenses = vec![
            Expense::new(Category::Food, Money::new(12.5)),
            Expense::new(Category::Misc, Money::new(3.0)),
        ];
        let text = format_expense_list(&period, &expenses, "$");
        assert!(text.contains("Expenses for 2026-02"));
        assert!(text.contains("$12.50"));
        assert!(text.contains("Misc"));
    }
}
