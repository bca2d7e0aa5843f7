//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget manager.

pub mod expense;
pub mod limit;
pub mod period;
pub mod report;

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;
use crate::services::BudgetManager;
use crate::storage::BudgetStore;

/// Top-level commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Record an expense
    Add {
        /// Category (Food, Transportation, Entertainment, Misc)
        category: String,
        /// Amount (e.g. "12.50" or "$12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// List the expenses of the current period
    #[command(alias = "ls")]
    Expenses,

    /// Set the spending limit for a category
    Limit {
        /// Category (Food, Transportation, Entertainment, Misc)
        category: String,
        /// New limit; negative values are ignored
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show all category limits
    Limits,

    /// Show totals against limits
    Status {
        /// Plain text lines instead of a table
        #[arg(long)]
        plain: bool,
    },

    /// Start a new period (clears expenses, keeps limits)
    Reset {
        /// Period label; defaults to the month after the current one
        period: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

/// Dispatch a command
pub fn handle_command<S: BudgetStore>(
    manager: &mut BudgetManager<S>,
    settings: &Settings,
    paths: &BudgetPaths,
    cmd: Commands,
) -> BudgetResult<()> {
    match cmd {
        Commands::Add { category, amount } => {
            expense::handle_add(manager, settings, &category, &amount)
        }
        Commands::Expenses => expense::handle_list(manager, settings),
        Commands::Limit { category, value } => {
            limit::handle_set(manager, settings, &category, &value)
        }
        Commands::Limits => limit::handle_list(manager, settings),
        Commands::Status { plain } => report::handle_status(manager, settings, plain),
        Commands::Reset { period: label } => period::handle_reset(manager, label),
        Commands::History { count } => {
            report::handle_history(&AuditLogger::new(paths.audit_log()), count)
        }
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }

            println!("budget-tracker configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings (schema v{}):", settings.schema_version);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!(
                "  Warning threshold: {:.0}%",
                settings.effective_warning_threshold() * 100.0
            );
            println!("  Audit log enabled: {}", settings.audit_enabled);
            Ok(())
        }
    }
}
