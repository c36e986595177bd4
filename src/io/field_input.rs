//! Boundary coercion of free-form text into typed field values
//!
//! Everything a user types arrives here as text. Numeric input never fails: a
//! value that does not parse becomes zero. Dates, categories, statuses and field
//! names are validated and rejected with a `LedgerError`.

use crate::types::{EntryKind, FieldUpdate, LedgerError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Parse a signed decimal, coercing anything unparseable to 0
///
/// Accepts `.` as the decimal separator, or a lone `,` when no `.` is present
/// (`1500,50`). Surrounding whitespace is ignored; empty input is 0.
pub fn parse_signed_amount(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match Decimal::from_str(&normalized) {
        Ok(amount) => amount,
        Err(_) => {
            warn!(input = text, "unparseable amount coerced to 0");
            Decimal::ZERO
        }
    }
}

/// Parse a non-negative entry amount; negatives and failures become 0
pub fn parse_amount(text: &str) -> Decimal {
    let amount = parse_signed_amount(text);
    if amount.is_sign_negative() && !amount.is_zero() {
        warn!(input = text, "negative amount coerced to 0");
        return Decimal::ZERO;
    }
    amount
}

/// Parse an ISO calendar date; empty input means "no date"
pub fn parse_date(text: &str) -> Result<Option<NaiveDate>, LedgerError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| LedgerError::invalid_date(text))
}

impl FieldUpdate {
    /// Build an update from a field name and raw text
    ///
    /// Field names are the generic `date`, `party`, `category`, `description`,
    /// `amount`, `status` and `method`, plus the kind-specific names
    /// (`due_date`, `supplier`, `payment_method` for payables; `receipt_date`,
    /// `client`, `receipt_method` for receivables).
    ///
    /// # Errors
    ///
    /// - `UnknownField` for names outside the kind's field set
    /// - `FieldNotApplicable` for `category` on a receivable
    /// - `InvalidDate`, `InvalidCategory` or `InvalidStatus` for bad values
    pub fn parse(kind: EntryKind, field: &str, value: &str) -> Result<FieldUpdate, LedgerError> {
        let name = field.trim().to_lowercase();

        let update = match (kind, name.as_str()) {
            (_, "date") | (EntryKind::Payable, "due_date") | (EntryKind::Receivable, "receipt_date") => {
                FieldUpdate::Date(parse_date(value)?)
            }
            (_, "party") | (EntryKind::Payable, "supplier") | (EntryKind::Receivable, "client") => {
                FieldUpdate::Party(value.to_string())
            }
            (EntryKind::Payable, "category") => FieldUpdate::Category(value.parse()?),
            (EntryKind::Receivable, "category") => {
                return Err(LedgerError::field_not_applicable(&name, kind))
            }
            (_, "description") => FieldUpdate::Description(value.to_string()),
            (_, "amount") => FieldUpdate::Amount(parse_amount(value)),
            (_, "status") => FieldUpdate::Status(value.parse()?),
            (_, "method")
            | (EntryKind::Payable, "payment_method")
            | (EntryKind::Receivable, "receipt_method") => FieldUpdate::Method(value.to_string()),
            _ => return Err(LedgerError::unknown_field(field, kind)),
        };

        Ok(update)
    }
}
