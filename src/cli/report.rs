//! Status and history CLI commands

use crate::audit::AuditLogger;
use crate::config::settings::Settings;
use crate::display::{format_status_report, format_totals_text};
use crate::error::BudgetResult;
use crate::services::BudgetManager;
use crate::storage::BudgetStore;

/// Print totals against limits
pub fn handle_status<S: BudgetStore>(
    manager: &BudgetManager<S>,
    settings: &Settings,
    plain: bool,
) -> BudgetResult<()> {
    let status = manager.calculate_status();
    let symbol = &settings.currency_symbol;

    if plain {
        print!("{}", format_totals_text(&status, manager.limits(), symbol));
    } else {
        print!(
            "{}",
            format_status_report(manager.period(), &status, manager.limits(), symbol)
        );
    }

    Ok(())
}

/// Print the most recent audit entries
pub fn handle_history(logger: &AuditLogger, count: usize) -> BudgetResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
