//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `entry`: Payable and receivable entries, categories and field updates
//! - `status`: Entry status and the status derivation rule
//! - `period`: Reporting period (year-month)
//! - `error`: Error types for the ledger

pub mod entry;
pub mod error;
pub mod period;
pub mod status;

pub use entry::{Category, EntryId, EntryKind, FieldUpdate, PayableEntry, ReceivableEntry};
pub use error::LedgerError;
pub use period::Period;
pub use status::{derive_status, Status};
