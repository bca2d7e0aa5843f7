//! Budget manager
//!
//! Owns the budget document for its lifetime and is the only place money
//! logic lives. Every mutation writes the whole document back through the
//! injected store before returning.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::BudgetResult;
use crate::models::{
    BudgetDocument, BudgetStatus, Category, Expense, Limits, Money, Period, SpendStatus,
    DEFAULT_WARNING_THRESHOLD,
};
use crate::storage::BudgetStore;

/// Keeps the budget document in memory and computes spend status
pub struct BudgetManager<S: BudgetStore> {
    storage: S,
    document: BudgetDocument,
    warning_threshold: f64,
    audit: Option<AuditLogger>,
}

impl<S: BudgetStore> BudgetManager<S> {
    /// Load the document from `storage` and take ownership of it
    pub fn new(storage: S) -> BudgetResult<Self> {
        let mut document = storage.load()?;
        document.fill_missing_limits();

        Ok(Self {
            storage,
            document,
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            audit: None,
        })
    }

    /// Use a different warning threshold (ratio in `(0, 1]`)
    pub fn with_warning_threshold(mut self, threshold: f64) -> Self {
        self.warning_threshold = threshold;
        self
    }

    /// Record mutations in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Append an expense and persist
    ///
    /// The amount is taken as given; parsing and rejecting bad input is the
    /// caller's job. If the save fails the expense is dropped again.
    pub fn add_expense(&mut self, category: Category, amount: Money) -> BudgetResult<()> {
        let expense = Expense::new(category, amount);
        self.document.expenses.push(expense.clone());
        if let Err(e) = self.persist() {
            self.document.expenses.pop();
            return Err(e);
        }

        info!(%category, amount = amount.amount(), "expense added");
        let id = format!("{}#{}", self.document.period, self.document.expenses.len());
        self.audit(AuditEntry::create(
            EntityType::Expense,
            id,
            &expense,
            Some(expense.to_string()),
        ));

        Ok(())
    }

    /// Set a category limit and persist
    ///
    /// Negative and NaN values are ignored without error. Returns whether the
    /// limit was applied.
    pub fn set_limit(&mut self, category: Category, value: Money) -> BudgetResult<bool> {
        if !value.is_non_negative() {
            warn!(%category, value = value.amount(), "ignoring invalid limit");
            return Ok(false);
        }

        let previous = self.document.limits.insert(category, value);
        if let Err(e) = self.persist() {
            match previous {
                Some(old) => self.document.limits.insert(category, old),
                None => self.document.limits.remove(&category),
            };
            return Err(e);
        }

        let before = previous.unwrap_or_default();
        info!(%category, limit = value.amount(), "limit set");
        self.audit(AuditEntry::update(
            EntityType::Limit,
            category.name(),
            &before,
            &value,
            Some(format!("{} -> {}", before, value)),
        ));

        Ok(true)
    }

    /// Start a new period: clear expenses, keep limits, persist
    pub fn reset_period(&mut self, new_period: Period) -> BudgetResult<()> {
        let discarded = std::mem::take(&mut self.document.expenses);
        let old_period = std::mem::replace(&mut self.document.period, new_period);
        if let Err(e) = self.persist() {
            self.document.expenses = discarded;
            self.document.period = old_period;
            return Err(e);
        }

        info!(
            from = %old_period,
            to = %self.document.period,
            cleared = discarded.len(),
            "period reset"
        );
        let summary = format!(
            "{} -> {}, {} expense(s) cleared",
            old_period,
            self.document.period,
            discarded.len()
        );
        self.audit(AuditEntry::reset(
            self.document.period.as_str(),
            &serde_json::json!({ "period": old_period, "expenses": discarded }),
            Some(summary),
        ));

        Ok(())
    }

    /// Sum of all category limits
    pub fn total_limit(&self) -> Money {
        self.document.limits.values().sum()
    }

    /// Amount spent per category; every category is present
    pub fn calculate_totals(&self) -> BTreeMap<Category, Money> {
        let mut totals: BTreeMap<Category, Money> = Category::all()
            .iter()
            .map(|c| (*c, Money::zero()))
            .collect();

        for expense in &self.document.expenses {
            *totals.entry(expense.category).or_default() += expense.amount;
        }

        totals
    }

    /// Totals plus per-category and overall status
    pub fn calculate_status(&self) -> BudgetStatus {
        let totals = self.calculate_totals();

        let statuses = totals
            .iter()
            .map(|(category, spent)| {
                let status = SpendStatus::evaluate(
                    *spent,
                    self.limit(*category),
                    self.warning_threshold,
                );
                (*category, status)
            })
            .collect();

        let total_spent: Money = totals.values().sum();
        let total_limit = self.total_limit();
        let overall = SpendStatus::evaluate(total_spent, total_limit, self.warning_threshold);

        BudgetStatus {
            totals,
            statuses,
            total_spent,
            total_limit,
            overall,
        }
    }

    /// Limit for one category (zero if somehow absent)
    pub fn limit(&self, category: Category) -> Money {
        self.document
            .limits
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// All category limits
    pub fn limits(&self) -> &Limits {
        &self.document.limits
    }

    /// Expenses of the current period, oldest first
    pub fn expenses(&self) -> &[Expense] {
        &self.document.expenses
    }

    /// Current period label
    pub fn period(&self) -> &Period {
        &self.document.period
    }

    /// The whole in-memory document
    pub fn document(&self) -> &BudgetDocument {
        &self.document
    }

    /// The injected store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> BudgetResult<()> {
        self.storage.save(&self.document)
    }

    // The document is already saved; a lost audit line is not worth failing for
    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, path = %logger.path().display(), "failed to write audit entry");
            }
        }
    }
}
