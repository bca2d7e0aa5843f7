//! Limit CLI commands

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::format_limits;
use crate::error::BudgetResult;
use crate::models::{Category, Money};
use crate::services::BudgetManager;
use crate::storage::BudgetStore;

/// Set the limit for one category
pub fn handle_set<S: BudgetStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
    category: &str,
    value: &str,
) -> BudgetResult<()> {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "dropping limit change");
            println!("Ignored: {}", e);
            return Ok(());
        }
    };

    let value = match Money::parse(value) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "dropping limit change");
            println!("Ignored: {}", e);
            return Ok(());
        }
    };

    let symbol = &settings.currency_symbol;
    if manager.set_limit(category, value)? {
        println!(
            "{} limit set to {}",
            category,
            value.format_with_symbol(symbol)
        );
    } else {
        println!(
            "Ignored: limit must not be negative ({} stays at {})",
            category,
            manager.limit(category).format_with_symbol(symbol)
        );
    }

    Ok(())
}

/// Print all limits
pub fn handle_list<S: BudgetStore>(
    manager: &BudgetManager<S>,
    settings: &Settings,
) -> BudgetResult<()> {
    print!(
        "{}",
        format_limits(manager.limits(), &settings.currency_symbol)
    );
    Ok(())
}
