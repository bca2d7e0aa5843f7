//! The persisted budget document
//!
//! One document holds the whole state: the current period label, the expenses
//! recorded in it, and the limit for every category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::expense::Expense;
use super::money::Money;
use super::period::Period;

/// Per-category limits, iterated in category display order
pub type Limits = BTreeMap<Category, Money>;

/// Everything persisted in `budget.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    /// Label of the current period
    #[serde(default = "Period::current")]
    pub period: Period,

    /// Expenses recorded in the current period, in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Spending limit per category
    #[serde(default)]
    pub limits: Limits,
}

impl BudgetDocument {
    /// Create an empty document for `period` with the default limits
    pub fn new(period: Period) -> Self {
        Self {
            period,
            expenses: Vec::new(),
            limits: default_limits(),
        }
    }

    /// Insert the default limit for every category missing from `limits`
    ///
    /// Returns the number of limits that were filled in.
    pub fn fill_missing_limits(&mut self) -> usize {
        let mut filled = 0;
        for category in Category::all() {
            self.limits.entry(*category).or_insert_with(|| {
                filled += 1;
                category.default_limit()
            });
        }
        filled
    }

    /// Whether every category has a limit
    pub fn has_all_limits(&self) -> bool {
        Category::all().iter().all(|c| self.limits.contains_key(c))
    }
}

impl Default for BudgetDocument {
    fn default() -> Self {
        Self::new(Period::current())
    }
}

/// The limits a fresh budget starts with
pub fn default_limits() -> Limits {
    Category::all()
        .iter()
        .map(|c| (*c, c.default_limit()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document() {
        let doc = BudgetDocument::new(Period::new("2026-02"));
        assert_eq!(doc.period.as_str(), "2026-02");
        assert!(doc.expenses.is_empty());
        assert!(doc.has_all_limits());
        assert_eq!(doc.limits[&Category::Food], Money::new(150.0));
        assert_eq!(doc.limits[&Category::Misc], Money::new(50.0));
    }

    #[test]
    fn test_parse_source_format() {
        let json = r#"{
            "period": "2026-02",
            "expenses": [
                {"category": "Food", "amount": 130},
                {"category": "Misc", "amount": 4.25}
            ],
            "limits": {"Food": 150, "Transportation": 75, "Entertainment": 100, "Misc": 50}
        }"#;

        let doc: BudgetDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.expenses.len(), 2);
        assert_eq!(doc.expenses[1].amount, Money::new(4.25));
        assert_eq!(doc.limits[&Category::Entertainment], Money::new(100.0));
    }

    #[test]
    fn test_limits_serialize_in_category_order() {
        let doc = BudgetDocument::new(Period::new("2026-02"));
        let json = serde_json::to_string(&doc).unwrap();

        let food = json.find("\"Food\"").unwrap();
        let transport = json.find("\"Transportation\"").unwrap();
        let fun = json.find("\"Entertainment\"").unwrap();
        let misc = json.find("\"Misc\"").unwrap();
        assert!(food < transport && transport < fun && fun < misc);
    }

    #[test]
    fn test_fill_missing_limits() {
        let json = r#"{"period": "2026-02", "expenses": [], "limits": {"Food": 20}}"#;
        let mut doc: BudgetDocument = serde_json::from_str(json).unwrap();
        assert!(!doc.has_all_limits());

        let filled = doc.fill_missing_limits();

        assert_eq!(filled, 3);
        assert!(doc.has_all_limits());
        // Existing values are kept
        assert_eq!(doc.limits[&Category::Food], Money::new(20.0));
        assert_eq!(doc.limits[&Category::Transportation], Money::new(75.0));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"period": "p", "expenses": [{"category": "Rent", "amount": 1}], "limits": {}}"#;
        assert!(serde_json::from_str::<BudgetDocument>(json).is_err());
    }
}
