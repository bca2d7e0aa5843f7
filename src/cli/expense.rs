//! Expense CLI commands

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_category_line, format_expense_list};
use crate::error::BudgetResult;
use crate::models::{Category, Money};
use crate::services::BudgetManager;
use crate::storage::BudgetStore;

/// Record an expense
///
/// Input that doesn't parse is dropped with a notice; nothing is written.
pub fn handle_add<S: BudgetStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
    category: &str,
    amount: &str,
) -> BudgetResult<()> {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "dropping expense");
            println!("Ignored: {}", e);
            return Ok(());
        }
    };

    let amount = match Money::parse(amount) {
        Ok(a) => a,
        Err(e) => {
            debug!(error = %e, "dropping expense");
            println!("Ignored: {}", e);
            return Ok(());
        }
    };

    manager.add_expense(category, amount)?;

    let status = manager.calculate_status();
    println!(
        "Added {} to {}",
        amount.format_with_symbol(&settings.currency_symbol),
        category
    );
    println!(
        "{}",
        format_category_line(
            category,
            status.spent(category),
            manager.limit(category),
            status.status(category),
            &settings.currency_symbol,
        )
    );

    Ok(())
}

/// List the expenses of the current period
pub fn handle_list<S: BudgetStore>(
    manager: &BudgetManager<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    print!(
        "{}",
        format_expense_list(
            manager.period(),
            manager.expenses(),
            &settings.currency_symbol
        )
    );
    Ok(())
}
