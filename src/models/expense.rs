//! Expense model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single recorded expense
///
/// Expenses are append-only: once recorded they are never edited or removed,
/// only cleared wholesale by a period reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub category: Category,
    pub amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(category: Category, amount: Money) -> Self {
        Self { category, amount }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}
