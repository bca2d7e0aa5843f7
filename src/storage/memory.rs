//! In-memory storage, for tests and embedding

use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::BudgetDocument;

use super::BudgetStore;

/// Keeps the last saved document in memory and counts saves
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RwLock<Option<BudgetDocument>>,
    saves: RwLock<usize>,
}

impl MemoryStorage {
    /// Create empty storage; the first load returns a default document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage that already holds `document`
    pub fn with_document(document: BudgetDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
            saves: RwLock::new(0),
        }
    }

    /// The last saved document, if any
    pub fn saved(&self) -> Result<Option<BudgetDocument>, BudgetError> {
        let document = self
            .document
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(document.clone())
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> Result<usize, BudgetError> {
        let saves = self
            .saves
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*saves)
    }
}

impl BudgetStore for MemoryStorage {
    fn load(&self) -> Result<BudgetDocument, BudgetError> {
        Ok(self.saved()?.unwrap_or_default())
    }

    fn save(&self, document: &BudgetDocument) -> Result<(), BudgetError> {
        let mut stored = self
            .document
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *stored = Some(document.clone());

        let mut saves = self
            .saves
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *saves += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Period;

    #[test]
    fn test_empty_load_is_default() {
        let storage = MemoryStorage::new();
        let doc = storage.load().unwrap();
        assert!(doc.expenses.is_empty());
        assert!(doc.has_all_limits());
        assert_eq!(storage.save_count().unwrap(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let doc = BudgetDocument::new(Period::new("2026-02"));

        storage.save(&doc).unwrap();

        assert_eq!(storage.load().unwrap(), doc);
        assert_eq!(storage.save_count().unwrap(), 1);
    }
}
