//! Spend status against limits
//!
//! A ratio of spent to limit at or above 1 is "exceeded"; at or above the
//! warning threshold it is "warning"; anything else is "normal". A limit that
//! is not positive gives a ratio of 0.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// Ratio at which a category turns to "warning" unless configured otherwise
pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.8;

/// Status of spending against a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpendStatus {
    #[default]
    Normal,
    Warning,
    Exceeded,
}

impl SpendStatus {
    /// Classify a spend ratio
    pub fn from_ratio(ratio: f64, warning_threshold: f64) -> Self {
        if ratio >= 1.0 {
            Self::Exceeded
        } else if ratio >= warning_threshold {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    /// Classify `spent` against `limit`
    pub fn evaluate(spent: Money, limit: Money, warning_threshold: f64) -> Self {
        Self::from_ratio(spent.ratio_of(limit), warning_threshold)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Exceeded => "exceeded",
        }
    }

    /// Marker appended to a totals line, empty for normal
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Warning => "(Warning)",
            Self::Exceeded => "(Exceeded)",
        }
    }
}

impl fmt::Display for SpendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals and status for the whole budget at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Amount spent per category (every category present)
    pub totals: BTreeMap<Category, Money>,
    /// Status per category
    pub statuses: BTreeMap<Category, SpendStatus>,
    /// Sum of all totals
    pub total_spent: Money,
    /// Sum of all limits
    pub total_limit: Money,
    /// Status of `total_spent` against `total_limit`
    pub overall: SpendStatus,
}

impl BudgetStatus {
    /// Spent amount for one category
    pub fn spent(&self, category: Category) -> Money {
        self.totals.get(&category).copied().unwrap_or_default()
    }

    /// Status for one category
    pub fn status(&self, category: Category) -> SpendStatus {
        self.statuses.get(&category).copied().unwrap_or_default()
    }

    /// Categories currently at warning or exceeded
    pub fn flagged(&self) -> Vec<(Category, SpendStatus)> {
        self.statuses
            .iter()
            .filter(|(_, s)| **s != SpendStatus::Normal)
            .map(|(c, s)| (*c, *s))
            .collect()
    }
}
