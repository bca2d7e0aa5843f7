//! Period CLI commands

use crate::error::BudgetResult;
use crate::models::Period;
use crate::services::BudgetManager;
use crate::storage::BudgetStore;

/// Start a new period
///
/// Without a label, moves to the month after the current `YYYY-MM` period,
/// or to the current month if the label isn't a month.
pub fn handle_reset<S: BudgetStore>(
    manager: &mut BudgetManager<S>,
    period: Option<String>,
) -> BudgetResult<()> {
    let new_period = match period {
        Some(label) if !label.trim().is_empty() => Period::new(label.trim()),
        _ => manager.period().successor(),
    };

    let old_period = manager.period().clone();
    let cleared = manager.expenses().len();
    manager.reset_period(new_period)?;

    println!(
        "Started period {} (was {}, cleared {} expense(s)). Limits unchanged.",
        manager.period(),
        old_period,
        cleared
    );

    Ok(())
}
