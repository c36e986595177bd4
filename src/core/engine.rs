//! Ledger engine
//!
//! This module provides the `LedgerEngine` that owns both entry collections, the
//! opening balance and the reporting period. It is the only component that mutates
//! them.
//!
//! The engine enforces these rules:
//! - Identifiers are issued from a counter and never reused within a session
//! - Date and status edits re-derive the entry status against the engine's clock
//! - Unknown identifiers are silent no-ops for both updates and removals
//! - Aggregates are recomputed from scratch on every query

use crate::core::aggregates::Aggregates;
use crate::core::entry_book::EntryBook;
use crate::core::traits::{Clock, SystemClock};
use crate::types::{
    EntryId, EntryKind, FieldUpdate, LedgerError, PayableEntry, Period, ReceivableEntry,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Session-scoped ledger of payables and receivables
///
/// Single-owner and synchronous: callers that share one engine must serialize
/// mutations themselves.
#[derive(Debug, Clone)]
pub struct LedgerEngine<C = SystemClock> {
    clock: C,
    payables: EntryBook<PayableEntry>,
    receivables: EntryBook<ReceivableEntry>,
    opening_balance: Decimal,
    period: Period,
    next_id: EntryId,
}

impl LedgerEngine<SystemClock> {
    /// Create an empty engine driven by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for LedgerEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> LedgerEngine<C> {
    /// Create an empty engine driven by `clock`
    ///
    /// The reporting period starts at the clock's current month and the opening
    /// balance at zero.
    pub fn with_clock(clock: C) -> Self {
        let period = Period::containing(clock.today());
        LedgerEngine {
            clock,
            payables: EntryBook::new(),
            receivables: EntryBook::new(),
            opening_balance: Decimal::ZERO,
            period,
            next_id: 1,
        }
    }

    fn issue_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a default payable and return its identifier
    pub fn add_payable(&mut self) -> EntryId {
        let id = self.issue_id();
        self.payables.add(id);
        debug!(entry = id, kind = %EntryKind::Payable, "entry added");
        id
    }

    /// Append a default receivable and return its identifier
    pub fn add_receivable(&mut self) -> EntryId {
        let id = self.issue_id();
        self.receivables.add(id);
        debug!(entry = id, kind = %EntryKind::Receivable, "entry added");
        id
    }

    /// Append a default entry of `kind`
    pub fn add_entry(&mut self, kind: EntryKind) -> EntryId {
        match kind {
            EntryKind::Payable => self.add_payable(),
            EntryKind::Receivable => self.add_receivable(),
        }
    }

    /// Replace one field of one entry
    ///
    /// Date and status edits re-derive the entry's status against the clock's
    /// current date.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which collection to look in
    /// * `id` - Identifier issued by `add_payable` / `add_receivable`
    /// * `update` - The field to replace and its typed value
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The entry was updated
    /// * `Ok(false)` - No entry of `kind` has this identifier; nothing changed
    ///
    /// # Errors
    ///
    /// Returns an error if the update can never apply to `kind`:
    /// - A status belonging to the other kind (`StatusNotAllowed`)
    /// - A category on a receivable (`FieldNotApplicable`)
    ///
    /// # Examples
    ///
    /// ```
    /// use cashflow_ledger::{EntryKind, FieldUpdate, FixedClock, LedgerEngine, Status};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// let mut engine = LedgerEngine::with_clock(FixedClock(today));
    /// let id = engine.add_payable();
    ///
    /// let yesterday = NaiveDate::from_ymd_opt(2026, 10, 17);
    /// engine
    ///     .update_entry(EntryKind::Payable, id, FieldUpdate::Date(yesterday))
    ///     .unwrap();
    ///
    /// assert_eq!(engine.payable(id).unwrap().status, Status::Overdue);
    /// ```
    pub fn update_entry(
        &mut self,
        kind: EntryKind,
        id: EntryId,
        update: FieldUpdate,
    ) -> Result<bool, LedgerError> {
        let today = self.clock.today();
        let field = update.field_name();

        let updated = match kind {
            EntryKind::Payable => self.payables.update(id, update, today)?,
            EntryKind::Receivable => self.receivables.update(id, update, today)?,
        };

        if updated {
            debug!(entry = id, %kind, field, "entry updated");
        } else {
            debug!(entry = id, %kind, field, "update ignored, no such entry");
        }

        Ok(updated)
    }

    /// Remove the entry with `id`; returns whether one was removed
    pub fn remove_entry(&mut self, kind: EntryKind, id: EntryId) -> bool {
        let removed = match kind {
            EntryKind::Payable => self.payables.remove(id).is_some(),
            EntryKind::Receivable => self.receivables.remove(id).is_some(),
        };

        debug!(entry = id, %kind, removed, "remove requested");
        removed
    }

    pub fn set_opening_balance(&mut self, amount: Decimal) {
        debug!(%amount, "opening balance set");
        self.opening_balance = amount;
    }

    pub fn opening_balance(&self) -> Decimal {
        self.opening_balance
    }

    /// Change the reporting period label; entries are not affected
    pub fn set_period(&mut self, period: Period) {
        debug!(%period, "period set");
        self.period = period;
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Payables in insertion order
    pub fn payables(&self) -> &[PayableEntry] {
        self.payables.entries()
    }

    /// Receivables in insertion order
    pub fn receivables(&self) -> &[ReceivableEntry] {
        self.receivables.entries()
    }

    pub fn payable(&self, id: EntryId) -> Option<&PayableEntry> {
        self.payables.get(id)
    }

    pub fn receivable(&self, id: EntryId) -> Option<&ReceivableEntry> {
        self.receivables.get(id)
    }

    /// Compute every derived figure from the current state
    pub fn aggregates(&self) -> Aggregates {
        Aggregates::compute(
            self.payables.entries(),
            self.receivables.entries(),
            self.opening_balance,
        )
    }

    /// Overdue advisory sentence, or `None` when nothing is overdue
    pub fn overdue_advisory(&self) -> Option<String> {
        self.aggregates().overdue.advisory()
    }
}
