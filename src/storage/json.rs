//! JSON file storage for the budget document

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BudgetError;
use crate::models::BudgetDocument;

use super::file_io::{read_json_optional, write_json_atomic};
use super::BudgetStore;

/// Stores the whole budget document in one JSON file
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create storage backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a budget has been saved yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl BudgetStore for JsonStorage {
    fn load(&self) -> Result<BudgetDocument, BudgetError> {
        let Some(mut document) = read_json_optional::<BudgetDocument, _>(&self.path)? else {
            debug!(path = %self.path.display(), "no budget file, starting fresh");
            return Ok(BudgetDocument::default());
        };

        let filled = document.fill_missing_limits();
        debug!(
            path = %self.path.display(),
            period = %document.period,
            expenses = document.expenses.len(),
            filled_limits = filled,
            "loaded budget"
        );

        Ok(document)
    }

    fn save(&self, document: &BudgetDocument) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, document)?;
        debug!(
            path = %self.path.display(),
            expenses = document.expenses.len(),
            "saved budget"
        );
        Ok(())
    }
}
