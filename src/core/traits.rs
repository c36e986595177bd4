//! Core traits for entries and time
//!
//! This module defines the seams the engine is generic over: the entry kinds it
//! stores and the clock it asks for "today" when deriving statuses.

use crate::types::{derive_status, EntryId, EntryKind, FieldUpdate, LedgerError, Status};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Behaviour shared by payable and receivable entries
///
/// Lets one collection type and one aggregation routine serve both kinds.
pub trait LedgerEntry {
    /// Which collection this entry type lives in
    const KIND: EntryKind;

    /// Create an entry with default field values
    fn new_default(id: EntryId) -> Self;

    fn id(&self) -> EntryId;

    fn amount(&self) -> Decimal;

    fn status(&self) -> Status;

    /// Due date for payables, receipt date for receivables
    fn reference_date(&self) -> Option<NaiveDate>;

    /// Store one field value as-is
    ///
    /// Status updates are ignored here; `apply` owns the status. Implementations
    /// must reject a field before mutating anything.
    fn set_field(&mut self, update: FieldUpdate) -> Result<(), LedgerError>;

    fn set_status(&mut self, status: Status);

    /// Apply a single-field edit
    ///
    /// A status edit supplies a new manual choice; a date edit keeps the current
    /// one. Either way the status is then re-derived against `today`.
    ///
    /// # Arguments
    ///
    /// * `update` - The field and its typed value
    /// * `today` - Reference date for overdue detection
    ///
    /// # Errors
    ///
    /// * `StatusNotAllowed` if the status belongs to the other kind
    /// * `FieldNotApplicable` if the kind has no such field
    ///
    /// The entry is left untouched when an error is returned.
    fn apply(&mut self, update: FieldUpdate, today: NaiveDate) -> Result<(), LedgerError> {
        let manual = match &update {
            FieldUpdate::Status(status) if !status.is_allowed_for(Self::KIND) => {
                return Err(LedgerError::status_not_allowed(*status, Self::KIND));
            }
            FieldUpdate::Status(status) => *status,
            _ => self.status(),
        };
        let rederive = update.affects_status();

        self.set_field(update)?;

        if rederive {
            let status = derive_status(self.reference_date(), Some(manual), Self::KIND, today);
            self.set_status(status);
        }

        Ok(())
    }
}

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
