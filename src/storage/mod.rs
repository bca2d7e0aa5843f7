//! Storage layer for budget-tracker
//!
//! The budget manager only sees the [`BudgetStore`] trait. The whole document
//! is read on load and written on every save; there is no partial update.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json_optional, write_json_atomic};
pub use json::JsonStorage;
pub use memory::MemoryStorage;

use crate::error::BudgetError;
use crate::models::BudgetDocument;

/// Loads and saves the budget document
pub trait BudgetStore {
    /// Load the persisted document, or a default one if nothing is persisted
    fn load(&self) -> Result<BudgetDocument, BudgetError>;

    /// Persist the whole document, replacing whatever was stored
    fn save(&self, document: &BudgetDocument) -> Result<(), BudgetError>;
}

impl<S: BudgetStore + ?Sized> BudgetStore for &S {
    fn load(&self) -> Result<BudgetDocument, BudgetError> {
        (**self).load()
    }

    fn save(&self, document: &BudgetDocument) -> Result<(), BudgetError> {
        (**self).save(document)
    }
}
