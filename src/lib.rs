//! budget-tracker - terminal expense tracker with per-category limits
//!
//! Expenses are recorded under a fixed set of categories, each with a spending
//! limit. Totals are reported against those limits with warning and exceeded
//! indicators. All state lives in a single JSON document.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Categories, amounts, periods, expenses, the budget document, status
//! - `storage`: The `BudgetStore` trait with JSON-file and in-memory backends
//! - `services`: `BudgetManager`, which owns the document and all money logic
//! - `audit`: Append-only log of every change
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::models::{Category, Money};
//! use budget_tracker::services::BudgetManager;
//! use budget_tracker::storage::JsonStorage;
//!
//! let mut manager = BudgetManager::new(JsonStorage::new("budget.json"))?;
//! manager.add_expense(Category::Food, Money::new(12.5))?;
//! let status = manager.calculate_status();
//! println!("{} spent, overall {}", status.total_spent, status.overall);
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
