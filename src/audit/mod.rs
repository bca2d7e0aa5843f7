//! Audit logging for budget-tracker
//!
//! Records every expense, limit change, and period reset made through the
//! budget manager in an append-only JSON-lines file.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::update(EntityType::Limit, "Food", &150.0, &200.0, None))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
