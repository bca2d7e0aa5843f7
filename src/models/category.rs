//! Expense categories
//!
//! The set of categories is fixed. Each one carries the limit a fresh budget
//! starts with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// An expense classification
///
/// Declaration order is display order; `BTreeMap<Category, _>` iterates in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Misc,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Misc,
    ];

    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The name used in the budget file and on screen
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Misc => "Misc",
        }
    }

    /// The limit a new budget starts with
    pub fn default_limit(&self) -> Money {
        match self {
            Self::Food => Money::new(150.0),
            Self::Transportation => Money::new(75.0),
            Self::Entertainment => Money::new(100.0),
            Self::Misc => Money::new(50.0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}

/// Returned when a name does not match any category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            Category::ALL.map(|c| c.name()).join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<_> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Food", "Transportation", "Entertainment", "Misc"]);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" MISC ".parse::<Category>().unwrap(), Category::Misc);
        assert_eq!(
            "Transportation".parse::<Category>().unwrap(),
            Category::Transportation
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Rent".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Rent".to_string()));
        assert!(err.to_string().contains("Food, Transportation"));
    }

    #[test]
    fn test_default_limits() {
        let total: Money = Category::all().iter().map(|c| c.default_limit()).sum();
        assert_eq!(total.amount(), 375.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");

        let parsed: Category = serde_json::from_str("\"Food\"").unwrap();
        assert_eq!(parsed, Category::Food);

        assert!(serde_json::from_str::<Category>("\"Rent\"").is_err());
    }
}
