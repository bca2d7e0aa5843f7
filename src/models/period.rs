//! Budget period label
//!
//! A period is a free-form label scoping the current set of expenses. Labels
//! in `YYYY-MM` form are understood as calendar months and can be advanced.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label for the current budgeting period (e.g. "2026-02")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    /// Create a period from any label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The current local calendar month
    pub fn current() -> Self {
        Self::from_month(Local::now().date_naive())
    }

    /// The calendar month containing `date`
    pub fn from_month(date: NaiveDate) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// Get the label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First day of the month, if the label is in `YYYY-MM` form
    pub fn month_start(&self) -> Option<NaiveDate> {
        let label = self.0.trim();
        if label.len() != 7 {
            return None;
        }
        NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d").ok()
    }

    /// The following calendar month, if the label is in `YYYY-MM` form
    pub fn next(&self) -> Option<Self> {
        self.month_start()
            .and_then(|start| start.checked_add_months(Months::new(1)))
            .map(Self::from_month)
    }

    /// The period a reset moves to when no label is given
    pub fn successor(&self) -> Self {
        self.next().unwrap_or_else(Self::current)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Period {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Period {
    fn from(label: String) -> Self {
        Self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_month() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(Period::from_month(date).as_str(), "2026-02");
    }

    #[test]
    fn test_next_month() {
        assert_eq!(Period::new("2026-02").next(), Some(Period::new("2026-03")));
        assert_eq!(Period::new("2025-12").next(), Some(Period::new("2026-01")));
    }

    #[test]
    fn test_free_form_label_has_no_next() {
        assert_eq!(Period::new("Spring trip").next(), None);
        assert_eq!(Period::new("2026-13").next(), None);
        assert_eq!(Period::new("2026-2").next(), None);
    }

    #[test]
    fn test_successor_falls_back_to_current() {
        assert_eq!(Period::new("2026-02").successor(), Period::new("2026-03"));
        assert_eq!(Period::new("whatever").successor(), Period::current());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Period::new("2026-02")).unwrap();
        assert_eq!(json, "\"2026-02\"");
    }
}
