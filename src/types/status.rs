//! Entry status and the status derivation rule
//!
//! Payables and receivables share one status enumeration, but each kind may only
//! hold three of its values. Paid and Received are the terminal (manual) values;
//! every other value is derived from the entry's reference date.

use super::entry::EntryKind;
use super::error::LedgerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a payable or receivable entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Terminal status of a payable
    Paid,

    /// Default status of a payable whose due date has not passed
    Open,

    /// Reference date has passed without the terminal status being set
    Overdue,

    /// Terminal status of a receivable
    Received,

    /// Default status of a receivable whose receipt date has not passed
    Pending,
}

impl Status {
    /// The terminal status for an entry kind (Paid or Received)
    pub fn terminal_for(kind: EntryKind) -> Status {
        match kind {
            EntryKind::Payable => Status::Paid,
            EntryKind::Receivable => Status::Received,
        }
    }

    /// The non-terminal status a fresh entry of this kind starts with
    pub fn default_for(kind: EntryKind) -> Status {
        match kind {
            EntryKind::Payable => Status::Open,
            EntryKind::Receivable => Status::Pending,
        }
    }

    /// Whether an entry of `kind` may hold this status
    pub fn is_allowed_for(self, kind: EntryKind) -> bool {
        self == Status::Overdue || self == Self::terminal_for(kind) || self == Self::default_for(kind)
    }

    /// Whether this is the terminal status of `kind`
    pub fn is_terminal_for(self, kind: EntryKind) -> bool {
        self == Self::terminal_for(kind)
    }

    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Paid => "Paid",
            Status::Open => "Open",
            Status::Overdue => "Overdue",
            Status::Received => "Received",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Ok(Status::Paid),
            "open" => Ok(Status::Open),
            "overdue" => Ok(Status::Overdue),
            "received" => Ok(Status::Received),
            "pending" => Ok(Status::Pending),
            _ => Err(LedgerError::invalid_status(s)),
        }
    }
}

/// Derive the status an entry should hold
///
/// 1. A manual terminal status for the kind always wins, whatever the date.
/// 2. Otherwise a reference date strictly before `today` yields Overdue.
/// 3. Otherwise the kind's default (Open or Pending).
///
/// An unset date never produces Overdue. The comparison is date-only.
pub fn derive_status(
    reference_date: Option<NaiveDate>,
    manual: Option<Status>,
    kind: EntryKind,
    today: NaiveDate,
) -> Status {
    if let Some(status) = manual {
        if status.is_terminal_for(kind) {
            return status;
        }
    }

    match reference_date {
        Some(date) if date < today => Status::Overdue,
        _ => Status::default_for(kind),
    }
}
