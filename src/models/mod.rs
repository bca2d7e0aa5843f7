//! Core data models for budget-tracker
//!
//! This module contains the data structures of the expense-tracking domain:
//! categories, amounts, periods, expenses, the persisted document, and the
//! computed spend status.

pub mod budget;
pub mod category;
pub mod expense;
pub mod money;
pub mod period;
pub mod status;

pub use budget::{default_limits, BudgetDocument, Limits};
pub use category::{Category, UnknownCategory};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use period::Period;
pub use status::{BudgetStatus, SpendStatus, DEFAULT_WARNING_THRESHOLD};
