//! Service layer for budget-tracker
//!
//! The service layer holds the business logic on top of the storage layer.

pub mod budget;

pub use budget::BudgetManager;
