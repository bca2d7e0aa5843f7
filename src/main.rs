use anyhow::{Context, Result};
use clap::Parser;

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{handle_command, Commands};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::logging::init_tracing;
use budget_tracker::services::BudgetManager;
use budget_tracker::storage::JsonStorage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track expenses against per-category spending limits",
    long_about = "Record expenses under fixed categories, set a spending limit for each, \
                  and see running totals with warning and exceeded indicators. \
                  Running without a command shows the current status."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = JsonStorage::new(paths.budget_file());
    let mut manager = BudgetManager::new(storage)
        .with_context(|| format!("Failed to load {}", paths.budget_file().display()))?
        .with_warning_threshold(settings.effective_warning_threshold());
    if settings.audit_enabled {
        manager = manager.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let command = cli.command.unwrap_or(Commands::Status { plain: false });
    handle_command(&mut manager, &settings, &paths, command)?;

    Ok(())
}
