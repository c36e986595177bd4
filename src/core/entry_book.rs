//! Ordered entry storage
//!
//! This module provides the `EntryBook` collection that holds one kind of entry in
//! insertion order, and the `LedgerEntry` implementations that apply field edits to
//! payables and receivables.
//!
//! # Ordering
//!
//! Entries are displayed in the order they were added, so the book is a `Vec`
//! rather than a map. Lookups are linear; books hold tens to low hundreds of rows.

use crate::core::traits::LedgerEntry;
use crate::types::{
    EntryId, EntryKind, FieldUpdate, LedgerError, PayableEntry, ReceivableEntry, Status,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

/// Insertion-ordered collection of one entry kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBook<E> {
    entries: Vec<E>,
}

impl<E> Default for EntryBook<E> {
    fn default() -> Self {
        EntryBook {
            entries: Vec::new(),
        }
    }
}

impl<E: LedgerEntry> EntryBook<E> {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default entry with the given identifier
    pub fn add(&mut self, id: EntryId) -> &E {
        self.entries.push(E::new_default(id));
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, id: EntryId) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut E> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Apply an edit to the entry with `id`
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The entry was found and updated
    /// * `Ok(false)` - No entry has this identifier; nothing changed
    /// * `Err(LedgerError)` - The edit cannot apply to this entry kind
    pub fn update(
        &mut self,
        id: EntryId,
        update: FieldUpdate,
        today: NaiveDate,
    ) -> Result<bool, LedgerError> {
        match self.get_mut(id) {
            Some(entry) => {
                entry.apply(update, today)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the entry with `id`, keeping the relative order of the rest
    pub fn remove(&mut self, id: EntryId) -> Option<E> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clamp an entry amount to the non-negative range
fn non_negative(amount: Decimal, id: EntryId) -> Decimal {
    if amount.is_sign_negative() && !amount.is_zero() {
        warn!(entry = id, %amount, "negative amount coerced to 0");
        Decimal::ZERO
    } else {
        amount
    }
}

impl LedgerEntry for PayableEntry {
    const KIND: EntryKind = EntryKind::Payable;

    fn new_default(id: EntryId) -> Self {
        PayableEntry::new(id)
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn status(&self) -> Status {
        self.status
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn set_field(&mut self, update: FieldUpdate) -> Result<(), LedgerError> {
        match update {
            FieldUpdate::Date(date) => self.due_date = date,
            FieldUpdate::Party(name) => self.supplier = name,
            FieldUpdate::Category(category) => self.category = category,
            FieldUpdate::Description(text) => self.description = text,
            FieldUpdate::Amount(amount) => self.amount = non_negative(amount, self.id),
            FieldUpdate::Status(_) => {}
            FieldUpdate::Method(method) => self.payment_method = method,
        }
        Ok(())
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl LedgerEntry for ReceivableEntry {
    const KIND: EntryKind = EntryKind::Receivable;

    fn new_default(id: EntryId) -> Self {
        ReceivableEntry::new(id)
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn amount(&self) -> Decimal {
        self.amount
    }

    fn status(&self) -> Status {
        self.status
    }

    fn reference_date(&self) -> Option<NaiveDate> {
        self.receipt_date
    }

    fn set_field(&mut self, update: FieldUpdate) -> Result<(), LedgerError> {
        match update {
            FieldUpdate::Date(date) => self.receipt_date = date,
            FieldUpdate::Party(name) => self.client = name,
            FieldUpdate::Category(_) => {
                return Err(LedgerError::field_not_applicable("category", Self::KIND))
            }
            FieldUpdate::Description(text) => self.description = text,
            FieldUpdate::Amount(amount) => self.amount = non_negative(amount, self.id),
            FieldUpdate::Status(_) => {}
            FieldUpdate::Method(method) => self.receipt_method = method,
        }
        Ok(())
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn book_with(ids: &[EntryId]) -> EntryBook<PayableEntry> {
        let mut book = EntryBook::new();
        for id in ids {
            book.add(*id);
        }
        book
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let book = book_with(&[3, 1, 2]);
        let ids: Vec<EntryId> = book.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_keeps_others_in_order() {
        let mut book = book_with(&[1, 2, 3, 4]);
        book.update(3, FieldUpdate::Amount(Decimal::new(25, 0)), today())
            .unwrap();

        let removed = book.remove(2);

        assert_eq!(removed.map(|e| e.id), Some(2));
        let ids: Vec<EntryId> = book.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(book.get(3).unwrap().amount, Decimal::new(25, 0));
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut book = book_with(&[1, 2]);
        let before = book.clone();

        assert!(book.remove(99).is_none());
        assert_eq!(book, before);
    }

    #[test]
    fn test_update_unknown_id_returns_false() {
        let mut book = book_with(&[1]);
        let before = book.clone();

        let result = book.update(42, FieldUpdate::Amount(Decimal::ONE), today());

        assert_eq!(result, Ok(false));
        assert_eq!(book, before);
    }

    #[test]
    fn test_update_touches_only_target_entry() {
        let mut book = book_with(&[1, 2]);
        book.update(2, FieldUpdate::Party("Landlord".to_string()), today())
            .unwrap();

        assert_eq!(book.get(1).unwrap(), &PayableEntry::new(1));
        assert_eq!(book.get(2).unwrap().supplier, "Landlord");
    }

    #[test]
    fn test_past_due_date_marks_payable_overdue() {
        let mut entry = PayableEntry::new(1);
        entry.apply(FieldUpdate::Date(Some(yesterday())), today()).unwrap();
        assert_eq!(entry.status, Status::Overdue);
    }

    #[test]
    fn test_date_edit_does_not_move_terminal_status() {
        let mut entry = PayableEntry::new(1);
        entry.apply(FieldUpdate::Status(Status::Paid), today()).unwrap();
        entry.apply(FieldUpdate::Date(Some(yesterday())), today()).unwrap();
        assert_eq!(entry.status, Status::Paid);

        entry.apply(FieldUpdate::Status(Status::Open), today()).unwrap();
        assert_eq!(entry.status, Status::Overdue);
    }

    #[test]
    fn test_moving_date_forward_clears_overdue() {
        let mut entry = ReceivableEntry::new(1);
        entry.apply(FieldUpdate::Date(Some(yesterday())), today()).unwrap();
        assert_eq!(entry.status, Status::Overdue);

        entry.apply(FieldUpdate::Date(Some(tomorrow())), today()).unwrap();
        assert_eq!(entry.status, Status::Pending);
    }

    #[test]
    fn test_clearing_date_clears_overdue() {
        let mut entry = PayableEntry::new(1);
        entry.apply(FieldUpdate::Date(Some(yesterday())), today()).unwrap();
        entry.apply(FieldUpdate::Date(None), today()).unwrap();
        assert_eq!(entry.status, Status::Open);
    }

    #[test]
    fn test_non_status_edit_keeps_status_snapshot() {
        let mut entry = PayableEntry::new(1);
        entry.apply(FieldUpdate::Date(Some(tomorrow())), today()).unwrap();

        // A later day passes the due date, but only date or status edits re-derive.
        let later = NaiveDate::from_ymd_opt(2026, 10, 25).unwrap();
        entry.apply(FieldUpdate::Amount(Decimal::TEN), later).unwrap();
        assert_eq!(entry.status, Status::Open);
    }

    #[rstest]
    #[case::payable_received(EntryKind::Payable, Status::Received)]
    #[case::payable_pending(EntryKind::Payable, Status::Pending)]
    #[case::receivable_paid(EntryKind::Receivable, Status::Paid)]
    #[case::receivable_open(EntryKind::Receivable, Status::Open)]
    fn test_foreign_status_rejected(#[case] kind: EntryKind, #[case] status: Status) {
        let result = match kind {
            EntryKind::Payable => {
                let mut entry = PayableEntry::new(1);
                let result = entry.apply(FieldUpdate::Status(status), today());
                assert_eq!(entry.status, Status::Open);
                result
            }
            EntryKind::Receivable => {
                let mut entry = ReceivableEntry::new(1);
                let result = entry.apply(FieldUpdate::Status(status), today());
                assert_eq!(entry.status, Status::Pending);
                result
            }
        };

        assert_eq!(result, Err(LedgerError::status_not_allowed(status, kind)));
    }

    #[test]
    fn test_category_rejected_on_receivable() {
        let mut entry = ReceivableEntry::new(1);
        let before = entry.clone();

        let result = entry.apply(FieldUpdate::Category(Category::Rent), today());

        assert!(matches!(result, Err(LedgerError::FieldNotApplicable { .. })));
        assert_eq!(entry, before);
    }

    #[rstest]
    #[case(Decimal::new(-500, 2), Decimal::ZERO)]
    #[case(Decimal::new(150050, 2), Decimal::new(150050, 2))]
    #[case(Decimal::ZERO, Decimal::ZERO)]
    fn test_amount_is_non_negative(#[case] input: Decimal, #[case] expected: Decimal) {
        let mut entry = PayableEntry::new(1);
        entry.apply(FieldUpdate::Amount(input), today()).unwrap();
        assert_eq!(entry.amount, expected);
    }

    #[test]
    fn test_field_edits_land_on_kind_specific_fields() {
        let mut payable = PayableEntry::new(1);
        payable.apply(FieldUpdate::Party("Power Co".to_string()), today()).unwrap();
        payable.apply(FieldUpdate::Method("Boleto".to_string()), today()).unwrap();
        payable.apply(FieldUpdate::Category(Category::Electricity), today()).unwrap();
        assert_eq!(payable.supplier, "Power Co");
        assert_eq!(payable.payment_method, "Boleto");
        assert_eq!(payable.category, Category::Electricity);

        let mut receivable = ReceivableEntry::new(2);
        receivable.apply(FieldUpdate::Party("Acme".to_string()), today()).unwrap();
        receivable.apply(FieldUpdate::Method("Pix".to_string()), today()).unwrap();
        receivable.apply(FieldUpdate::Description("Invoice 12".to_string()), today()).unwrap();
        assert_eq!(receivable.client, "Acme");
        assert_eq!(receivable.receipt_method, "Pix");
        assert_eq!(receivable.description, "Invoice 12");
    }

    #[rstest]
    #[case::past_pending(Some(yesterday()), Status::Pending, Status::Overdue)]
    #[case::future_overdue(Some(tomorrow()), Status::Overdue, Status::Pending)]
    #[case::past_received(Some(yesterday()), Status::Received, Status::Received)]
    #[case::undated_overdue(None, Status::Overdue, Status::Pending)]
    fn test_receivable_status_edit_rederives(
        #[case] date: Option<NaiveDate>,
        #[case] chosen: Status,
        #[case] expected: Status,
    ) {
        let mut entry = ReceivableEntry::new(1);
        entry.apply(FieldUpdate::Date(date), today()).unwrap();

        entry.apply(FieldUpdate::Status(chosen), today()).unwrap();

        assert_eq!(entry.status, expected);
    }

    #[test]
    fn test_set_field_leaves_status_to_apply() {
        let mut entry = PayableEntry::new(1);
        entry.set_field(FieldUpdate::Status(Status::Paid)).unwrap();
        assert_eq!(entry.status, Status::Open);
    }
}
